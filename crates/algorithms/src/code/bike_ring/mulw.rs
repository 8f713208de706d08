//! 64x64 -> 128-bit carryless multiplication
//!
//! The word multiplier behind every ring product. It is a 4-bit comb: a
//! table of `y * j` for every nibble value `j` is built on the stack, then
//! `x` is consumed one byte (two nibbles) at a time from the top down.
//! Table entries are `y` shifted left by at most 3 bits, and the extra
//! 4-bit shift for the high nibble loses up to 7 top bits of `y`; the
//! masked correction pass at the end puts those bits back into the high
//! word.

use bikering_internal::constant_time::{ct_msb_mask, ct_select_word};
use zeroize::Zeroize;

/// Scratch table for [`mulw_acc`]
///
/// Rebuilt from scratch on every call; the contents never outlive it.
pub(crate) type NibbleTable = [u64; 16];

#[inline(always)]
fn nibble_product(u: &NibbleTable, byte: u64) -> u64 {
    let lo = ct_select_word(u, (byte & 15) as usize);
    let hi = ct_select_word(u, ((byte >> 4) & 15) as usize);
    lo ^ (hi << 4)
}

/// Carryless product of `x` and `y`, returned as `(low, high)`
#[inline]
pub(crate) fn mulw(u: &mut NibbleTable, x: u64, y: u64) -> (u64, u64) {
    u[0] = 0;
    u[1] = y;
    for i in (2..16).step_by(2) {
        u[i] = u[i >> 1] << 1;
        u[i + 1] = u[i] ^ y;
    }

    let mut l = nibble_product(u, x);
    let mut h = 0u64;
    for k in (8..64).step_by(8).rev() {
        let g = nibble_product(u, x >> k);
        l ^= g << k;
        h ^= g >> (64 - k);
    }

    // Bits of y pushed off the top of the table entries
    let mut x = x;
    for p in 0..7 {
        x = (x & 0xFEFE_FEFE_FEFE_FEFE) >> 1;
        h ^= x & ct_msb_mask(y << p);
    }

    debug_assert_eq!(h >> 63, 0);
    u.zeroize();
    (l, h)
}

/// XOR the carryless product of `x` and `y` into `z[z_off]` and `z[z_off + 1]`
#[inline]
pub(crate) fn mulw_acc(u: &mut NibbleTable, x: u64, y: u64, z: &mut [u64], z_off: usize) {
    let (l, h) = mulw(u, x, y);
    z[z_off] ^= l;
    z[z_off + 1] ^= h;
}
