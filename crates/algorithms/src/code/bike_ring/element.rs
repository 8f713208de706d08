//! Element buffers of the ring GF(2)[x]/(x^r - 1)

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use bikering_internal::constant_time::{ct_eq_words, ct_is_zero_words};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A reduced ring element: `size` little-endian 64-bit words
///
/// Coefficient `i` lives in bit `i % 64` of word `i / 64`. Every element
/// handed out by a [`Ring`](super::Ring) keeps the bits at positions `>= r`
/// cleared; code that writes through [`Element::as_words_mut`] must do the
/// same.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Element {
    words: Vec<u64>,
}

impl Element {
    pub(crate) fn zeroed(size: usize) -> Self {
        Self { words: vec![0u64; size] }
    }

    pub(crate) fn from_vec(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Number of 64-bit words backing this element
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True for an element with no words (never produced by a ring)
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Read-only view of the coefficient words
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Mutable view of the coefficient words
    ///
    /// The caller must leave every bit at position `>= r` cleared.
    pub fn as_words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }

    /// Coefficient `i` as 0 or 1
    ///
    /// `i` is treated as public; panics if it lies outside the buffer.
    pub fn bit(&self, i: usize) -> u8 {
        ((self.words[i >> 6] >> (i & 63)) & 1) as u8
    }

    /// Constant-time test for the zero polynomial
    pub fn is_zero(&self) -> Choice {
        ct_is_zero_words(&self.words)
    }
}

impl ConstantTimeEq for Element {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_words(&self.words, &other.words)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element(")?;
        for (i, w) in self.words.iter().enumerate().rev() {
            if i + 1 != self.words.len() {
                write!(f, "_")?;
            }
            write!(f, "{:016x}", w)?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u64]> for Element {
    fn as_ref(&self) -> &[u64] {
        &self.words
    }
}

/// An unreduced product: `2 * size` words, degree up to `2r - 2`
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct ExtendedElement {
    words: Vec<u64>,
}

impl ExtendedElement {
    pub(crate) fn zeroed(size_ext: usize) -> Self {
        Self { words: vec![0u64; size_ext] }
    }

    pub(crate) fn as_words(&self) -> &[u64] {
        &self.words
    }

    pub(crate) fn as_words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }
}
