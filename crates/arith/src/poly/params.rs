//! Polynomial ring parameters
//!
//! One marker type per deployed NTRU parameter set, each tying a ring
//! degree and coefficient modulus together at the type level. The values
//! come from the shared parameter tables in `pqcore-params`.

use pqcore_params::pqc::ntru;

/// Trait defining the modulus and degree for a polynomial ring
pub trait Modulus {
    /// The coefficient modulus Q
    const Q: u16;

    /// The polynomial degree N (number of coefficients)
    const N: usize;
}

/// NTRU-HPS-2048-509 ring: `Z_2048[x]/(x^509 - 1)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NtruHps2048509;

impl Modulus for NtruHps2048509 {
    const Q: u16 = ntru::NTRU_HPS_2048_509.q;
    const N: usize = ntru::NTRU_HPS_2048_509.n;
}

/// NTRU-HPS-2048-677 ring: `Z_2048[x]/(x^677 - 1)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NtruHps2048677;

impl Modulus for NtruHps2048677 {
    const Q: u16 = ntru::NTRU_HPS_2048_677.q;
    const N: usize = ntru::NTRU_HPS_2048_677.n;
}

/// NTRU-HPS-4096-821 ring: `Z_4096[x]/(x^821 - 1)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NtruHps4096821;

impl Modulus for NtruHps4096821 {
    const Q: u16 = ntru::NTRU_HPS_4096_821.q;
    const N: usize = ntru::NTRU_HPS_4096_821.n;
}

/// NTRU-HRSS-701 ring: `Z_8192[x]/(x^701 - 1)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NtruHrss701;

impl Modulus for NtruHrss701 {
    const Q: u16 = ntru::NTRU_HRSS_701.q;
    const N: usize = ntru::NTRU_HRSS_701.n;
}
