//! Data-oblivious sorting of 64-bit keys
//!
//! The surrounding key-generation routine derives a secret permutation by
//! sorting keys that pack a random value with an index. Sorting them with a
//! comparison network keeps the compare/exchange schedule a function of the
//! length alone, so key values never influence timing or access pattern.

use pqcore_internal::constant_time::minmax_u64;

/// Sorts `keys` ascending in place using Batcher's odd-even merge network
///
/// The positions compared and the number of exchanges depend only on
/// `keys.len()`; each exchange is a branchless min/max. Lengths below two
/// are a no-op. Any length is accepted, power of two or not.
pub fn sort_u64(keys: &mut [u64]) {
    let n = keys.len();
    if n < 2 {
        return;
    }

    let mut top = 1;
    while top < n - top {
        top += top;
    }

    let mut p = top;
    while p > 0 {
        // Direct compare-exchanges at distance p.
        for i in 0..n - p {
            if i & p == 0 {
                let (lo, hi) = keys.split_at_mut(i + p);
                minmax_u64(&mut lo[i], &mut hi[0]);
            }
        }

        // Merge phases: carry x[i + p] through decreasing gaps in a
        // register, storing it back once per position.
        let mut i = 0;
        let mut q = top;
        while q > p {
            while i < n - q {
                if i & p == 0 {
                    let mut a = keys[i + p];
                    let mut r = q;
                    while r > p {
                        minmax_u64(&mut a, &mut keys[i + r]);
                        r >>= 1;
                    }
                    keys[i + p] = a;
                }
                i += 1;
            }
            q >>= 1;
        }

        p >>= 1;
    }
}
