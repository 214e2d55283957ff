//! Constants for the NTRU encryption scheme

/// NTRU parameter set
pub struct NtruParams {
    /// Polynomial degree (coefficient count of a ring element)
    pub n: usize,

    /// Coefficient modulus
    pub q: u16,
}

/// NTRU-HPS-2048-509 parameters
pub const NTRU_HPS_2048_509: NtruParams = NtruParams { n: 509, q: 2048 };

/// NTRU-HPS-2048-677 parameters
pub const NTRU_HPS_2048_677: NtruParams = NtruParams { n: 677, q: 2048 };

/// NTRU-HPS-4096-821 parameters
pub const NTRU_HPS_4096_821: NtruParams = NtruParams { n: 821, q: 4096 };

/// NTRU-HRSS-701 parameters
pub const NTRU_HRSS_701: NtruParams = NtruParams { n: 701, q: 8192 };
