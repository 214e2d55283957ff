//! Field arithmetic over GF(2^13)
//!
//! Elements are degree-at-most-12 polynomials over the binary field,
//! reduced modulo `x^13 + x^4 + x^3 + x + 1`. That polynomial is encoded in
//! the fold masks and the {9, 10, 12, 13} shift schedule below; the
//! constants are exact per the target scheme and must not be reworked
//! without a proof of bit equivalence (see the brute-force cross-check in
//! the tests).
//!
//! Both operations are total, branch-free, and touch no memory indexed by
//! operand values.

use pqcore_params::pqc::mceliece::GFBITS;

/// All-ones mask over the field's bit width
pub const GFMASK: u16 = (1 << GFBITS) - 1;

/// An element of GF(2^13)
///
/// The inner value is always in `[0, 8191]`; constructors and operations
/// mask to 13 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gf(u16);

impl Gf {
    /// The additive identity
    pub const ZERO: Gf = Gf(0);

    /// The multiplicative identity
    pub const ONE: Gf = Gf(1);

    /// Builds a field element, masking the value to 13 bits
    #[inline(always)]
    pub fn new(value: u16) -> Self {
        Gf(value & GFMASK)
    }

    /// Returns the 13-bit representation of the element
    #[inline(always)]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Field addition (characteristic 2, so addition is XOR)
    #[inline(always)]
    pub fn add(self, other: Gf) -> Gf {
        Gf(self.0 ^ other.0)
    }

    /// Field multiplication
    ///
    /// Carry-less schoolbook product of the two 13-bit operands (every bit
    /// of both operands contributes unconditionally, intermediate up to 25
    /// bits), folded back under the field polynomial in two passes.
    pub fn mul(self, other: Gf) -> Gf {
        let t0 = u64::from(self.0);
        let t1 = u64::from(other.0);

        let mut tmp = t0 * (t1 & 1);
        for i in 1..GFBITS {
            tmp ^= t0 * (t1 & (1 << i));
        }

        let t = tmp & 0x01FF_0000;
        tmp ^= (t >> 9) ^ (t >> 10) ^ (t >> 12) ^ (t >> 13);

        let t = tmp & 0x0000_E000;
        tmp ^= (t >> 9) ^ (t >> 10) ^ (t >> 12) ^ (t >> 13);

        Gf((tmp & u64::from(GFMASK)) as u16)
    }

    /// Field squaring
    #[inline(always)]
    pub fn square(self) -> Gf {
        self.mul(self)
    }

    /// Fused square-square-multiply: computes `(self^4) * m`
    ///
    /// The two Frobenius squarings are folded algebraically into six wide
    /// partial products, then the 64-bit accumulator is reduced over six
    /// geometrically spaced mask windows. Numerically identical to
    /// `self.square().square().mul(m)` for every input pair.
    pub fn sq2mul(self, m: Gf) -> Gf {
        const M: [u64; 6] = [
            0x1FF0_0000_0000_0000,
            0x000F_F800_0000_0000,
            0x0000_07FC_0000_0000,
            0x0000_0003_FE00_0000,
            0x0000_0000_01FE_0000,
            0x0000_0000_0001_E000,
        ];

        let mut t0 = u64::from(self.0);
        let t1 = u64::from(m.0);

        let mut x = (t1 << 18) * (t0 & (1 << 6));

        t0 ^= t0 << 21;

        x ^= t1 * (t0 & 0x0_1000_0001);
        x ^= (t1 * (t0 & 0x0_2000_0002)) << 3;
        x ^= (t1 * (t0 & 0x0_4000_0004)) << 6;
        x ^= (t1 * (t0 & 0x0_8000_0008)) << 9;
        x ^= (t1 * (t0 & 0x1_0000_0010)) << 12;
        x ^= (t1 * (t0 & 0x2_0000_0020)) << 15;

        for mask in M {
            let t = x & mask;
            x ^= (t >> 9) ^ (t >> 10) ^ (t >> 12) ^ (t >> 13);
        }

        Gf((x & u64::from(GFMASK)) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference multiplication straight from the field definition: carry-less
    /// product, then long division by x^13 + x^4 + x^3 + x + 1.
    fn reference_mul(a: u16, b: u16) -> u16 {
        const POLY: u32 = 0x201B;
        let mut prod: u32 = 0;
        for i in 0..13 {
            if (b >> i) & 1 == 1 {
                prod ^= u32::from(a) << i;
            }
        }
        for bit in (13..26).rev() {
            if (prod >> bit) & 1 == 1 {
                prod ^= POLY << (bit - 13);
            }
        }
        prod as u16
    }

    #[test]
    fn mul_identity_and_zero_exhaustive() {
        for a in 0..=GFMASK {
            let a = Gf::new(a);
            assert_eq!(a.mul(Gf::ONE), a);
            assert_eq!(a.mul(Gf::ZERO), Gf::ZERO);
            assert_eq!(Gf::ONE.mul(a), a);
            assert_eq!(Gf::ZERO.mul(a), Gf::ZERO);
        }
    }

    #[test]
    fn mul_stays_in_field() {
        for a in (0..=GFMASK).step_by(7) {
            for b in (0..=GFMASK).step_by(13) {
                assert!(Gf::new(a).mul(Gf::new(b)).value() <= GFMASK);
            }
        }
    }

    #[test]
    fn mul_commutes() {
        for a in (0..=GFMASK).step_by(11) {
            for b in (0..=GFMASK).step_by(17) {
                let (a, b) = (Gf::new(a), Gf::new(b));
                assert_eq!(a.mul(b), b.mul(a));
            }
        }
    }

    #[test]
    fn mul_matches_reference_reduction() {
        // Validates the opaque fold constants against long division.
        for a in (0..=GFMASK).step_by(5) {
            for b in (0..=GFMASK).step_by(9) {
                assert_eq!(
                    Gf::new(a).mul(Gf::new(b)).value(),
                    reference_mul(a, b),
                    "a={:#06x} b={:#06x}",
                    a,
                    b
                );
            }
        }
        // Corner values.
        for &(a, b) in &[(GFMASK, GFMASK), (GFMASK, 1), (0x1000, 0x1000), (2, 0x1FFF)] {
            assert_eq!(Gf::new(a).mul(Gf::new(b)).value(), reference_mul(a, b));
        }
    }

    #[test]
    fn sq2mul_matches_mul_chain_exhaustive_in_a() {
        for a in 0..=GFMASK {
            let a = Gf::new(a);
            for m in [0, 1, 2, 0x0AAA, 0x1357, GFMASK] {
                let m = Gf::new(m);
                let fused = a.sq2mul(m);
                let chained = a.square().square().mul(m);
                assert_eq!(fused, chained, "a={:#06x} m={:#06x}", a.value(), m.value());
            }
        }
    }

    #[test]
    fn sq2mul_sampled_pairs() {
        for a in (0..=GFMASK).step_by(19) {
            for m in (0..=GFMASK).step_by(23) {
                let (a, m) = (Gf::new(a), Gf::new(m));
                assert_eq!(a.sq2mul(m), a.square().square().mul(m));
            }
        }
    }

    #[test]
    fn add_is_xor() {
        assert_eq!(Gf::new(0b1010).add(Gf::new(0b0110)), Gf::new(0b1100));
        for a in (0..=GFMASK).step_by(101) {
            assert_eq!(Gf::new(a).add(Gf::new(a)), Gf::ZERO);
            assert_eq!(Gf::new(a).add(Gf::ZERO), Gf::new(a));
        }
    }

    #[test]
    fn new_masks_to_field_width() {
        assert_eq!(Gf::new(0xFFFF).value(), GFMASK);
        assert_eq!(Gf::new(0x2000).value(), 0);
    }

    #[test]
    fn square_agrees_with_reference() {
        for a in (0..=GFMASK).step_by(3) {
            assert_eq!(Gf::new(a).square().value(), reference_mul(a, a));
        }
    }
}
