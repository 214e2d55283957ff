//! Constants for post-quantum cryptographic algorithms

pub mod mceliece;
pub mod ntru;
