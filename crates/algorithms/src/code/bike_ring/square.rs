//! Squaring by bit interleave
//!
//! Over GF(2) the cross terms of `(sum a_i x^i)^2` cancel in pairs, leaving
//! `sum a_i x^(2i)`. Squaring is therefore a spread of every coefficient
//! bit to twice its index, with no word multiplications.

#[inline(always)]
fn expand32(x: u32) -> u64 {
    let mut t = x as u64;
    t = (t | (t << 16)) & 0x0000_FFFF_0000_FFFF;
    t = (t | (t << 8)) & 0x00FF_00FF_00FF_00FF;
    t = (t | (t << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    t = (t | (t << 2)) & 0x3333_3333_3333_3333;
    t = (t | (t << 1)) & 0x5555_5555_5555_5555;
    t
}

/// Spread each word of `x` over two words of `zz`
pub(crate) fn expand_words(x: &[u64], zz: &mut [u64]) {
    debug_assert_eq!(zz.len(), x.len() * 2);
    for (i, &w) in x.iter().enumerate() {
        zz[i << 1] = expand32(w as u32);
        zz[(i << 1) + 1] = expand32((w >> 32) as u32);
    }
}
