//! Arithmetic kernels for the code-based scheme
//!
//! Field arithmetic over GF(2^13) and the bit-packed matrix machinery used
//! while converting a parity-check matrix to systematic form.

pub mod gf;

#[cfg(feature = "alloc")]
pub mod matrix;
