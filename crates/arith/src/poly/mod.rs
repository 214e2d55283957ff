//! Polynomial ring arithmetic for the lattice-based scheme
//!
//! Elements of `Z_q[x]/(x^N - 1)` with schoolbook cyclic-convolution
//! multiplication. `N` and `q` are fixed per parameter set through the
//! [`Modulus`] trait, so coefficient counts and reduction constants are
//! compile-time knowledge.

pub mod params;
pub mod ring;

pub use params::{Modulus, NtruHps2048509, NtruHps2048677, NtruHps4096821, NtruHrss701};
pub use ring::Polynomial;
