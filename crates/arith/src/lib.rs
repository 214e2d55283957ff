//! Constant-time arithmetic kernels for post-quantum schemes
//!
//! This crate implements the numeric hot paths shared by a code-based KEM
//! (Classic McEliece) and a lattice-based encryption scheme (NTRU):
//!
//! - [`Gf`]: multiplication and fused square-square-multiply over GF(2^13)
//! - [`sort_u64`]: an in-place Batcher odd-even merge sorting network whose
//!   compare/exchange schedule depends only on the input length
//! - [`BinaryMatrix`]: bit-packed binary matrices with a branch-free partial
//!   Gaussian elimination used during systematic-form conversion
//! - [`Polynomial`]: schoolbook multiplication in `Z_q[x]/(x^N - 1)`
//!
//! # Security
//!
//! Every kernel runs in time determined by its public sizes alone. Secret
//! values never select a branch or a memory address; conditional updates go
//! through the arithmetic masks in `pqcore-internal`. The one fallible
//! operation, [`BinaryMatrix::reduce_and_permute`], reports its outcome
//! through an explicit [`Result`] so the success path stays uniform.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Code-based scheme kernels: field arithmetic and matrix reduction
pub mod code;
pub use code::gf::Gf;
#[cfg(feature = "alloc")]
pub use code::matrix::BinaryMatrix;

// The data-oblivious sorting network
pub mod sort;
pub use sort::sort_u64;

// Lattice scheme kernels: polynomial ring arithmetic
#[cfg(feature = "alloc")]
pub mod poly;
#[cfg(feature = "alloc")]
pub use poly::{
    Modulus, NtruHps2048509, NtruHps2048677, NtruHps4096821, NtruHrss701, Polynomial,
};
