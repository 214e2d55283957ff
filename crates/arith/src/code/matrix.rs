//! Bit-packed binary matrices and the systematic-form pivot step
//!
//! A [`BinaryMatrix`] holds parity-check-like secret-key material for the
//! code-based scheme. [`BinaryMatrix::reduce_and_permute`] performs the one
//! step of systematic-form conversion that cannot use plain row reduction:
//! selecting 32 pivot columns inside a 64-column window and moving them into
//! leading position, without leaking which columns were chosen.

use alloc::{vec, vec::Vec};

use pqcore_internal::constant_time::{bit_to_mask_u64, eq_mask_u64};
use pqcore_internal::endian::{u64_from_le_bytes, u64_to_le_bytes};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// Row count of the pivot block processed per reduction call
pub const PIVOT_ROWS: usize = 32;

/// Column count of the pivot block processed per reduction call
pub const PIVOT_COLS: usize = 64;

/// A bit-packed binary matrix
///
/// Rows are stored contiguously, eight columns per byte, least significant
/// bit first. The column count must be a multiple of 8 so every row is a
/// whole number of bytes. Holds secret-key material, so the backing storage
/// is wiped on drop.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl BinaryMatrix {
    /// Creates an all-zero matrix of the given dimensions
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        validate::parameter(rows > 0, "rows", "matrix must have at least one row")?;
        validate::parameter(
            cols > 0 && cols % 8 == 0,
            "cols",
            "column count must be a positive multiple of 8",
        )?;
        Ok(Self {
            rows,
            cols,
            data: vec![0; rows * (cols / 8)],
        })
    }

    /// Creates a matrix from row-major packed bytes
    ///
    /// `bytes.len()` must equal `rows * cols / 8`.
    pub fn from_bytes(rows: usize, cols: usize, bytes: Vec<u8>) -> Result<Self> {
        let mut m = Self::zeroed(rows, cols)?;
        validate::length("matrix bytes", bytes.len(), m.data.len())?;
        m.data = bytes;
        Ok(m)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bytes per packed row
    #[inline(always)]
    fn stride(&self) -> usize {
        self.cols / 8
    }

    /// Reads the bit at `(row, col)`
    ///
    /// Indexing a secret position through this accessor leaks the position;
    /// it exists for callers assembling or inspecting matrices, not for use
    /// inside secret-dependent loops.
    pub fn bit(&self, row: usize, col: usize) -> bool {
        (self.data[row * self.stride() + col / 8] >> (col % 8)) & 1 == 1
    }

    /// Writes the bit at `(row, col)`
    pub fn set_bit(&mut self, row: usize, col: usize, bit: bool) {
        let at = row * self.stride() + col / 8;
        let mask = 1u8 << (col % 8);
        self.data[at] = (self.data[at] & !mask) | ((bit as u8) << (col % 8));
    }

    /// Loads the 64-bit word covering columns `8 * byte_offset ..` of a row
    #[inline(always)]
    fn row_word(&self, row: usize, byte_offset: usize) -> u64 {
        let at = row * self.stride() + byte_offset;
        u64_from_le_bytes(&self.data[at..at + 8])
    }

    /// Stores a 64-bit word back into a row; whole-word, never torn
    #[inline(always)]
    fn set_row_word(&mut self, row: usize, byte_offset: usize, word: u64) {
        let at = row * self.stride() + byte_offset;
        self.data[at..at + 8].copy_from_slice(&u64_to_le_bytes(word));
    }

    /// Selects pivot columns for one 32-row block and moves them into
    /// leading position across the whole matrix.
    ///
    /// The 32x64 block starting at `(row_offset, row_offset)` is copied out
    /// and run through 32 rounds of branch-free Gaussian elimination to find
    /// one pivot column per row. The permutation array `pi` (one entry per
    /// matrix column, always a bijection) and the columns of every matrix
    /// row are then updated so each pivot column lands at its block-local
    /// offset. Returns a mask of the 64 local offsets that held pivots.
    ///
    /// `row_offset` must be a multiple of 8 with the full block in range,
    /// and `pi.len()` must equal the column count; these are public-value
    /// contract checks, rejected before any secret-dependent work.
    ///
    /// On [`Error::RankDeficient`] the matrix and permutation may have been
    /// left partially processed (well-formed, same dimensions, just not
    /// reduced); retries must start from a fresh copy. The success/failure
    /// outcome itself is public: callers react to it by resampling anyway.
    pub fn reduce_and_permute(&mut self, pi: &mut [i16], row_offset: usize) -> Result<u64> {
        validate::length("permutation", pi.len(), self.cols)?;
        validate::parameter(
            row_offset % 8 == 0,
            "row_offset",
            "block column window must be byte aligned",
        )?;
        validate::parameter(
            row_offset + PIVOT_ROWS <= self.rows,
            "row_offset",
            "pivot block exceeds matrix rows",
        )?;
        validate::parameter(
            row_offset + PIVOT_COLS <= self.cols,
            "row_offset",
            "pivot block exceeds matrix columns",
        )?;

        let block = row_offset / 8;

        // Extract the 32x64 block, one row per word.
        let mut buf = [0u64; PIVOT_ROWS];
        for (i, word) in buf.iter_mut().enumerate() {
            *word = self.row_word(row_offset + i, block);
        }

        // Find the pivot column of every block row by Gaussian elimination
        // on the extracted copy. Pivot positions come out strictly
        // increasing, one per round, or the block is rank deficient.
        let mut ctz_list = [0u32; PIVOT_ROWS];
        let mut pivots = 0u64;

        for i in 0..PIVOT_ROWS {
            let mut t = buf[i];
            for j in i + 1..PIVOT_ROWS {
                t |= buf[j];
            }

            if t == 0 {
                return Err(Error::RankDeficient);
            }

            let s = t.trailing_zeros();
            ctz_list[i] = s;
            pivots |= 1 << s;

            // Row i takes ownership of the pivot bit: absorb rows below
            // while its own bit s is still clear. The mask is recomputed
            // every step because an absorb can set the bit.
            for j in i + 1..PIVOT_ROWS {
                let mask = bit_to_mask_u64(!(buf[i] >> s));
                buf[i] ^= buf[j] & mask;
            }
            // Clear bit s from every row below row i.
            for j in i + 1..PIVOT_ROWS {
                let mask = bit_to_mask_u64(buf[j] >> s);
                buf[j] ^= buf[i] & mask;
            }
        }

        // Update the permutation. Every (j, k) pair is visited and masked so
        // the swap pattern reveals nothing about the pivot positions.
        for j in 0..PIVOT_ROWS {
            for k in j + 1..PIVOT_COLS {
                let mask = eq_mask_u64(k as u64, u64::from(ctz_list[j])) as i16;
                let d = (pi[row_offset + j] ^ pi[row_offset + k]) & mask;
                pi[row_offset + j] ^= d;
                pi[row_offset + k] ^= d;
            }
        }

        // Move the pivot columns into leading position in every row of the
        // matrix, swapping bit j with bit ctz_list[j] via the XOR-difference
        // trick. Each row is updated with one whole-word store.
        for row in 0..self.rows {
            let mut t = self.row_word(row, block);

            for (j, &s) in ctz_list.iter().enumerate() {
                let mut d = t >> j;
                d ^= t >> s;
                d &= 1;

                t ^= d << s;
                t ^= d << j;
            }

            self.set_row_word(row, block, t);
        }

        Ok(pivots)
    }
}

/// Constant-time equality over the packed contents
///
/// Dimensions are public and may short-circuit; the bit contents may not.
/// The derived `PartialEq` is for tests and public-value comparisons.
impl ConstantTimeEq for BinaryMatrix {
    fn ct_eq(&self, other: &Self) -> Choice {
        let shape = (self.rows == other.rows && self.cols == other.cols) as u8;
        Choice::from(shape) & self.data.ct_eq(&other.data)
    }
}
