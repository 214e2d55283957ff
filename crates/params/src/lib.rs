//! Fixed public parameters for the pqcore library
//!
//! Compile-time constants describing the two scheme instantiations the
//! arithmetic core targets. These values are public protocol parameters,
//! never secrets, and are never negotiated at runtime.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod pqc;
