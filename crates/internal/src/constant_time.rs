//! Constant-time word operations to prevent timing attacks
//!
//! All helpers operate on 64-bit words, the limb size of the ring
//! arithmetic. None of them branch on, or index memory with, the values
//! they are given; slice lengths are treated as public.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Mask generation for a single bit
///
/// Returns all-ones if the low bit of `bit` is set, all-zeros otherwise.
#[inline(always)]
pub fn ct_mask_u64(bit: u64) -> u64 {
    0u64.wrapping_sub(bit & 1)
}

/// Sign-spread of the top bit
///
/// Returns all-ones if bit 63 of `x` is set, all-zeros otherwise.
#[inline(always)]
pub fn ct_msb_mask(x: u64) -> u64 {
    ((x as i64) >> 63) as u64
}

/// Table lookup without a secret-dependent address
///
/// Every entry of `table` is read and the one at `index` is kept through a
/// masked select, so the memory access pattern is independent of `index`.
#[inline(always)]
pub fn ct_select_word(table: &[u64], index: usize) -> u64 {
    let index = index as u64;
    let mut out = 0u64;
    for (i, entry) in table.iter().enumerate() {
        let hit = (i as u64).ct_eq(&index);
        out.conditional_assign(entry, hit);
    }
    out
}

/// Constant-time equality of two word slices
///
/// Slices of different length compare unequal.
pub fn ct_eq_words(a: &[u64], b: &[u64]) -> Choice {
    a.ct_eq(b)
}

/// Constant-time test for an all-zero word slice
pub fn ct_is_zero_words(a: &[u64]) -> Choice {
    let acc = a.iter().fold(0u64, |acc, w| acc | w);
    acc.ct_eq(&0)
}

/// Number of set bits across a word slice
///
/// Uses the per-word population count, which compiles to a fixed-latency
/// instruction on every supported target.
pub fn ct_popcount_words(a: &[u64]) -> u32 {
    a.iter().map(|w| w.count_ones()).sum()
}
