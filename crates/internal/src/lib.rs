//! Internal utilities shared by the pqcore crates
//!
//! This crate carries the low-level helpers that the arithmetic kernels
//! build on: constant-time masking primitives and endianness conversions.
//! Nothing here is scheme-specific; everything here is timing-uniform.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
pub mod endian;
