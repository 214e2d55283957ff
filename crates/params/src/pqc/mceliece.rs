//! Constants for the Classic McEliece key encapsulation mechanism
//!
//! Only the binary-Goppa instantiations over GF(2^13) are listed; the
//! arithmetic core does not support other field widths.

/// Width in bits of the Goppa field GF(2^13)
pub const GFBITS: usize = 13;

/// Row count of the pivot block processed per reduction call
pub const PIVOT_BLOCK_ROWS: usize = 32;

/// Column count of the pivot block processed per reduction call
pub const PIVOT_BLOCK_COLS: usize = 64;

/// Structure containing Classic McEliece code parameters
pub struct McElieceParams {
    /// Field width in bits
    pub m: usize,

    /// Code length
    pub n: usize,

    /// Code dimension
    pub k: usize,

    /// Error correction capability
    pub t: usize,

    /// Row count of the parity-check matrix (`m * t`)
    pub pk_nrows: usize,
}

/// McEliece-460896 parameters (NIST security level 3)
pub const MCELIECE_460896: McElieceParams = McElieceParams {
    m: 13,
    n: 4608,
    k: 3360,
    t: 96,
    pk_nrows: 1248,
};

/// McEliece-6688128 parameters (NIST security level 5)
pub const MCELIECE_6688128: McElieceParams = McElieceParams {
    m: 13,
    n: 6688,
    k: 5024,
    t: 128,
    pk_nrows: 1664,
};

/// McEliece-6960119 parameters (NIST security level 5)
pub const MCELIECE_6960119: McElieceParams = McElieceParams {
    m: 13,
    n: 6960,
    k: 5413,
    t: 119,
    pk_nrows: 1547,
};

/// McEliece-8192128 parameters (NIST security level 5)
pub const MCELIECE_8192128: McElieceParams = McElieceParams {
    m: 13,
    n: 8192,
    k: 6528,
    t: 128,
    pk_nrows: 1664,
};
