//! Constant-time operations to prevent timing attacks
//!
//! Every branch on secret data in the arithmetic kernels goes through the
//! mask helpers in this module, so the mask algebra lives (and is tested)
//! in exactly one place.

use subtle::{Choice, ConditionallySelectable};

/// Expand the low bit of `bit` into a full-width mask
///
/// Returns all-ones if the low bit is set, all-zeros otherwise. Higher bits
/// of `bit` are ignored. This function runs in constant time regardless of
/// the input value.
#[inline(always)]
pub fn bit_to_mask_u64(bit: u64) -> u64 {
    (bit & 1).wrapping_neg()
}

/// Constant-time equality mask
///
/// Returns all-ones if `x == y`, all-zeros otherwise, without branching on
/// the operand values. Correct over the full 64-bit range.
#[inline(always)]
pub fn eq_mask_u64(x: u64, y: u64) -> u64 {
    ((x == y) as u64).wrapping_neg()
}

/// Constant-time less-than mask
///
/// Returns all-ones if `a < b`, all-zeros otherwise, without branching on
/// the operand values.
#[inline(always)]
pub fn lt_mask_u64(a: u64, b: u64) -> u64 {
    ((a < b) as u64).wrapping_neg()
}

/// Branchless compare-and-exchange
///
/// Leaves the smaller value in `a` and the larger in `b`. The comparison
/// outcome is folded into an XOR mask; no value-dependent branch or memory
/// access occurs.
#[inline(always)]
pub fn minmax_u64(a: &mut u64, b: &mut u64) {
    let swap = lt_mask_u64(*b, *a);
    let d = (*a ^ *b) & swap;
    *a ^= d;
    *b ^= d;
}

/// Constant-time selection
///
/// Returns `a` if `condition` is false, `b` if `condition` is true.
/// This function runs in constant time regardless of the input values.
pub fn ct_select<T>(a: T, b: T, condition: bool) -> T
where
    T: ConditionallySelectable,
{
    let choice = Choice::from(condition as u8);
    T::conditional_select(&a, &b, choice)
}
