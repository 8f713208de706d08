//! Unreduced polynomial products over 64-bit limbs
//!
//! Karatsuba generalised to any limb count `n`. Writing `D_i = x_i * y_i`
//! for the diagonal products, every cross term `x_lo*y_hi + x_hi*y_lo`
//! equals `(x_lo^x_hi)*(y_lo^y_hi) + D_lo + D_hi`. The `D` contributions
//! of all cross terms landing on one output position collapse to a
//! running XOR of the diagonal words, so only the `(lo, hi)` products
//! remain to be computed: `n + n(n-1)/2` word multiplications in total.

use super::mulw::{mulw_acc, NibbleTable};

/// Write the full carryless product of `x` and `y` into `zz`
///
/// `x` and `y` must have the same length `n` and `zz` length `2n`; `zz` is
/// expected to be zero on entry.
pub(crate) fn multiply_acc(x: &[u64], y: &[u64], zz: &mut [u64]) {
    let size = x.len();
    debug_assert_eq!(y.len(), size);
    debug_assert_eq!(zz.len(), size * 2);

    let mut u: NibbleTable = [0u64; 16];

    for i in 0..size {
        mulw_acc(&mut u, x[i], y[i], zz, i << 1);
    }

    // Positions below i << 1 have already been consumed when zz[i] is written
    let (mut v0, mut v1) = (zz[0], zz[1]);
    for i in 1..size {
        v0 ^= zz[i << 1];
        zz[i] = v0 ^ v1;
        v1 ^= zz[(i << 1) + 1];
    }

    let w = v0 ^ v1;
    for i in 0..size {
        zz[size + i] = zz[i] ^ w;
    }

    let last = size - 1;
    for z_pos in 1..(last * 2) {
        let mut hi = last.min(z_pos);
        let mut lo = z_pos - hi;

        while lo < hi {
            mulw_acc(&mut u, x[lo] ^ x[hi], y[lo] ^ y[hi], zz, z_pos);

            lo += 1;
            hi -= 1;
        }
    }
}

/// Schoolbook product, `n^2` word multiplications
///
/// Kept as the reference the Karatsuba path is checked against.
#[cfg(test)]
pub(crate) fn multiply_schoolbook(x: &[u64], y: &[u64], zz: &mut [u64]) {
    let mut u: NibbleTable = [0u64; 16];
    for (i, &x_i) in x.iter().enumerate() {
        for (j, &y_j) in y.iter().enumerate() {
            mulw_acc(&mut u, x_i, y_j, zz, i + j);
        }
    }
}
