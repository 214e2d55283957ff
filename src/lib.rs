//! # pqcore
//!
//! A constant-time arithmetic core for code-based and lattice-based
//! post-quantum cryptography.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqcore = "0.1"
//! ```
//!
//! ## Features
//!
//! - `arith` (default): the arithmetic kernels (field, sorter, reducer, ring)
//! - `std` (default): standard library support
//! - `alloc`: heap-backed types without the full standard library
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`pqcore-arith`]: GF(2^13) arithmetic, the oblivious sorting network,
//!   the systematic-form reducer, and the polynomial-ring multiplier
//! - [`pqcore-internal`]: constant-time masking and endianness utilities
//! - [`pqcore-params`]: fixed public parameters of the target schemes

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqcore_internal as internal;
pub use pqcore_params as params;

// Feature-gated re-exports
#[cfg(feature = "arith")]
pub use pqcore_arith as arith;

/// Common imports for pqcore users
pub mod prelude {
    // Re-export error types
    #[cfg(feature = "arith")]
    pub use crate::arith::{Error, Result};

    // Re-export the arithmetic kernels
    #[cfg(feature = "arith")]
    pub use crate::arith::{sort_u64, Gf};

    #[cfg(all(feature = "arith", any(feature = "std", feature = "alloc")))]
    pub use crate::arith::{BinaryMatrix, Modulus, Polynomial};

    // Re-export scheme parameter tables
    pub use crate::params::pqc::{mceliece, ntru};
}
