//! Arithmetic in the BIKE ring R = GF(2)[x]/(x^r - 1)
//!
//! A [`Ring`] is fixed by the odd block length `r` and acts on caller-owned
//! [`Element`] buffers. Addition is word-wise XOR. Products are formed
//! unreduced at double width (generalised Karatsuba for multiplication,
//! bit interleave for squaring) and then folded back with `x^r = 1`.
//! Inversion is an addition chain of squarings and multiplications.
//!
//! Every operation reads its inputs through shared references and writes
//! a single `&mut` output. Where an in-place update is useful there is a
//! dedicated `*_in_place` / `add_to` form instead of aliased arguments.
//!
//! None of the arithmetic branches on or indexes memory by element data;
//! only `r` and word counts, which are public, steer control flow.

mod element;
mod inversion;
mod karatsuba;
mod mulw;
mod serialize;
mod square;


pub use element::Element;
pub(crate) use element::ExtendedElement;

use bikering_internal::constant_time::{ct_mask_u64, ct_popcount_words};
use bikering_params::pqc::bike::BikeParams;

use crate::error::{validate, Error, Result};

/// The ring GF(2)[x]/(x^r - 1) for one block length `r`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    bits: u32,
    size: usize,
    size_ext: usize,
}

impl Ring {
    /// Create the ring for block length `r`
    ///
    /// `r` must be odd and below 2^31.
    pub fn new(r: u32) -> Result<Self> {
        if r & 0x8000_0001 != 1 {
            tracing::warn!(r, "rejected ring parameter");
            return Err(Error::param("r", "must be odd, positive and below 2^31"));
        }

        let size = ((r + 63) >> 6) as usize;
        let ring = Self {
            bits: r,
            size,
            size_ext: size * 2,
        };
        tracing::debug!(r, size, size_ext = ring.size_ext, "created ring");
        Ok(ring)
    }

    /// Create the ring used by a BIKE parameter set
    pub fn for_level(params: &BikeParams) -> Result<Self> {
        Self::new(params.r)
    }

    /// The block length `r`
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Words per element
    pub fn size(&self) -> usize {
        self.size
    }

    /// Words per unreduced product
    pub fn size_ext(&self) -> usize {
        self.size_ext
    }

    /// Bits of the top word that hold coefficients
    #[inline(always)]
    fn partial_bits(&self) -> u32 {
        self.bits & 63
    }

    /// Mask of the coefficient bits of the top word
    #[inline(always)]
    fn partial_mask(&self) -> u64 {
        u64::MAX >> (64 - self.partial_bits())
    }

    /// The zero element
    pub fn create(&self) -> Element {
        Element::zeroed(self.size)
    }

    pub(crate) fn create_ext(&self) -> ExtendedElement {
        ExtendedElement::zeroed(self.size_ext)
    }

    /// The multiplicative identity
    pub fn one(&self) -> Element {
        let mut z = self.create();
        z.as_words_mut()[0] = 1;
        z
    }

    /// Build an element from raw words
    ///
    /// Fails if the word count is wrong or any bit at position `>= r` is set.
    pub fn from_words(&self, words: &[u64]) -> Result<Element> {
        validate::length("Ring::from_words", words.len(), self.size)?;
        validate::contract(
            words[self.size - 1] & !self.partial_mask() == 0,
            "Ring::from_words",
            "bits at or above r are set",
        )?;
        Ok(Element::from_vec(words.to_vec()))
    }

    /// Build a sparse element from coefficient positions
    ///
    /// Repeated positions cancel. The positions may be secret: each one is
    /// written with a masked pass over every word rather than an indexed
    /// store. Only the bound check against `r` branches.
    pub fn from_indices(&self, indices: &[u32]) -> Result<Element> {
        let mut z = self.create();
        for &idx in indices {
            validate::parameter(idx < self.bits, "indices", "position must be below r")?;
            let word = (idx >> 6) as u64;
            let bit = 1u64 << (idx & 63);
            for (j, w) in z.as_words_mut().iter_mut().enumerate() {
                let hit = ((j as u64) ^ word).wrapping_sub(1) >> 63;
                *w ^= bit & ct_mask_u64(hit);
            }
        }
        Ok(z)
    }

    /// Number of non-zero coefficients
    pub fn weight(&self, x: &Element) -> u32 {
        debug_assert_eq!(x.len(), self.size);
        ct_popcount_words(x.as_words())
    }

    /// `z = x + y`
    pub fn add(&self, x: &Element, y: &Element, z: &mut Element) {
        debug_assert_eq!(x.len(), self.size);
        debug_assert_eq!(y.len(), self.size);
        debug_assert_eq!(z.len(), self.size);
        let z = z.as_words_mut();
        for i in 0..self.size {
            z[i] = x.as_words()[i] ^ y.as_words()[i];
        }
    }

    /// `z += x`
    pub fn add_to(&self, x: &Element, z: &mut Element) {
        debug_assert_eq!(x.len(), self.size);
        debug_assert_eq!(z.len(), self.size);
        for (z_i, x_i) in z.as_words_mut().iter_mut().zip(x.as_words()) {
            *z_i ^= x_i;
        }
    }

    /// `z = x`
    pub fn copy(&self, x: &Element, z: &mut Element) {
        debug_assert_eq!(x.len(), self.size);
        z.as_words_mut().copy_from_slice(x.as_words());
    }

    /// `z = x * y`
    pub fn multiply(&self, x: &Element, y: &Element, z: &mut Element) {
        debug_assert_eq!(x.len(), self.size);
        debug_assert_eq!(y.len(), self.size);
        let mut tt = self.create_ext();
        karatsuba::multiply_acc(x.as_words(), y.as_words(), tt.as_words_mut());
        self.reduce(&tt, z);
    }

    /// `z = z * y`
    pub fn multiply_in_place(&self, z: &mut Element, y: &Element) {
        debug_assert_eq!(z.len(), self.size);
        debug_assert_eq!(y.len(), self.size);
        let mut tt = self.create_ext();
        karatsuba::multiply_acc(z.as_words(), y.as_words(), tt.as_words_mut());
        self.reduce(&tt, z);
    }

    /// `z = x^2`
    pub fn square(&self, x: &Element, z: &mut Element) {
        debug_assert_eq!(x.len(), self.size);
        let mut tt = self.create_ext();
        square::expand_words(x.as_words(), tt.as_words_mut());
        self.reduce(&tt, z);
    }

    /// `z = z^2`
    pub fn square_in_place(&self, z: &mut Element) {
        debug_assert_eq!(z.len(), self.size);
        let mut tt = self.create_ext();
        square::expand_words(z.as_words(), tt.as_words_mut());
        self.reduce(&tt, z);
    }

    /// `z = x^(2^n)`; `n = 0` copies `x`
    // TODO: for large n this is a fixed coefficient permutation that could
    // be precomputed once per n and applied directly.
    pub fn square_n(&self, x: &Element, n: usize, z: &mut Element) {
        debug_assert_eq!(x.len(), self.size);
        if n == 0 {
            self.copy(x, z);
            return;
        }

        let mut tt = self.create_ext();
        square::expand_words(x.as_words(), tt.as_words_mut());
        self.reduce(&tt, z);

        for _ in 1..n {
            square::expand_words(z.as_words(), tt.as_words_mut());
            self.reduce(&tt, z);
        }
    }

    /// Fold an unreduced product back into `[0, r)` using `x^r = 1`
    ///
    /// Word `i` of the part at and above position `r` is
    /// `tt[size+i] << excess | tt[size+i-1] >> partial`, which is XORed onto
    /// word `i` of the low part. Products have degree at most `2r - 2`, so a
    /// single fold suffices.
    pub(crate) fn reduce(&self, tt: &ExtendedElement, z: &mut Element) {
        let size = self.size;
        let partial = self.partial_bits();
        let excess = 64 - partial;
        let tt = tt.as_words();
        debug_assert_eq!(tt.len(), self.size_ext);
        debug_assert_eq!(z.len(), size);

        let z = z.as_words_mut();
        for i in 0..size {
            z[i] = tt[i] ^ (tt[size + i] << excess) ^ (tt[size + i - 1] >> partial);
        }
        z[size - 1] &= self.partial_mask();
    }
}
