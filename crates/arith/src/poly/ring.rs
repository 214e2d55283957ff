//! Ring elements and schoolbook cyclic-convolution multiplication

use alloc::{vec, vec::Vec};

use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::params::Modulus;
use crate::error::{validate, Result};

/// A polynomial in the ring `Z_Q[x]/(x^N - 1)`
///
/// Coefficients are stored in standard order, always canonical (`< Q`).
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial<M: Modulus> {
    coeffs: Vec<u16>,
    _marker: PhantomData<M>,
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0; M::N],
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of coefficients
    ///
    /// The slice must hold exactly `N` values; they are reduced to canonical
    /// form. Construction is not a secret-dependent path.
    pub fn from_coeffs(coeffs: &[u16]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs.len(), M::N)?;
        Ok(Self {
            coeffs: coeffs.iter().map(|&c| c % M::Q).collect(),
            _marker: PhantomData,
        })
    }

    /// Returns the degree N of the ring
    pub fn degree() -> usize {
        M::N
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u16] {
        &self.coeffs
    }

    /// Branch-free reduction of a value below `2 * Q` into canonical form
    #[inline(always)]
    fn reduce_coefficient(a: u32) -> u16 {
        let q = u32::from(M::Q);
        let mask = ((a >= q) as u32).wrapping_neg();
        a.wrapping_sub(q & mask) as u16
    }

    /// Polynomial addition modulo Q
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..M::N {
            let sum = u32::from(self.coeffs[i]) + u32::from(other.coeffs[i]);
            result.coeffs[i] = Self::reduce_coefficient(sum);
        }
        result
    }

    /// Polynomial subtraction modulo Q
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..M::N {
            let diff = u32::from(M::Q) + u32::from(self.coeffs[i]) - u32::from(other.coeffs[i]);
            result.coeffs[i] = Self::reduce_coefficient(diff);
        }
        result
    }

    /// Ring multiplication: schoolbook cyclic convolution
    ///
    /// Computes `c[k] = sum a[k+i] * b[N-i] (i in 1..N-k) + sum a[k-i] * b[i]
    /// (i in 0..=k)`, the definition of multiplication modulo `x^N - 1`
    /// split into two triangular ranges so no index arithmetic wraps inside
    /// the inner loops. Every coefficient pair contributes unconditionally;
    /// there is no data-dependent control flow and no transform shortcut.
    ///
    /// Each output coefficient accumulates in 64 bits (at most `N * (Q-1)^2
    /// < 2^37`, far from overflow) and is reduced on write-out, so results
    /// are canonical.
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for k in 0..M::N {
            let mut acc = 0u64;
            for i in 1..M::N - k {
                acc += u64::from(self.coeffs[k + i]) * u64::from(other.coeffs[M::N - i]);
            }
            for i in 0..=k {
                acc += u64::from(self.coeffs[k - i]) * u64::from(other.coeffs[i]);
            }
            result.coeffs[k] = (acc % u64::from(M::Q)) as u16;
        }
        result
    }
}

/// Constant-time equality over the coefficient vector
///
/// Ring elements can hold key material; comparisons between secrets must
/// not short-circuit. The derived `PartialEq` is for tests and
/// public-value comparisons.
impl<M: Modulus> ConstantTimeEq for Polynomial<M> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.coeffs.ct_eq(&other.coeffs)
    }
}

// Implement standard ops traits for ergonomic usage
impl<M: Modulus> Add for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl<M: Modulus> Sub for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

impl<M: Modulus> Mul for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(self, other)
    }
}
