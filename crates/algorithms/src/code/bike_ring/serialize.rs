//! Byte encodings of ring elements
//!
//! The wire form is `ceil(r/8)` bytes, little-endian bit-packed: bit 0 of
//! byte 0 is the constant coefficient. Padding bits above `r` in the last
//! byte are written as zero and ignored when read.

use alloc::vec;
use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use super::{Element, Ring};
use crate::error::{validate, Result};

impl Ring {
    /// Encoded size of one element in bytes
    pub fn byte_len(&self) -> usize {
        (self.bits as usize + 7) >> 3
    }

    /// Bytes used by the top, partially filled word
    #[inline(always)]
    fn partial_bytes(&self) -> usize {
        ((self.partial_bits() + 7) >> 3) as usize
    }

    /// Read an element from its wire form into `z`
    ///
    /// `bs` must hold at least [`byte_len`](Self::byte_len) bytes; only the
    /// first `byte_len` are read.
    pub fn decode_bytes(&self, bs: &[u8], z: &mut Element) {
        debug_assert!(bs.len() >= self.byte_len());
        debug_assert_eq!(z.len(), self.size);

        let full = self.size - 1;
        let partial_mask = self.partial_mask();
        let words = z.as_words_mut();
        LittleEndian::read_u64_into(&bs[..full << 3], &mut words[..full]);

        let mut last = [0u8; 8];
        let n = self.partial_bytes();
        last[..n].copy_from_slice(&bs[full << 3..(full << 3) + n]);
        words[full] = LittleEndian::read_u64(&last) & partial_mask;
        last.zeroize();
    }

    /// Write the wire form of `x` into `bs`
    ///
    /// `bs` must hold at least [`byte_len`](Self::byte_len) bytes. `x` must
    /// have every bit at position `>= r` clear; this is only checked in
    /// debug builds.
    pub fn encode_bytes(&self, x: &Element, bs: &mut [u8]) {
        debug_assert!(bs.len() >= self.byte_len());
        debug_assert_eq!(x.len(), self.size);

        let full = self.size - 1;
        let words = x.as_words();
        debug_assert_eq!(words[full] >> self.partial_bits(), 0);

        LittleEndian::write_u64_into(&words[..full], &mut bs[..full << 3]);

        let mut last = [0u8; 8];
        LittleEndian::write_u64(&mut last, words[full]);
        let n = self.partial_bytes();
        bs[full << 3..(full << 3) + n].copy_from_slice(&last[..n]);
        last.zeroize();
    }

    /// Decode an exactly sized wire buffer
    pub fn decode(&self, bs: &[u8]) -> Result<Element> {
        validate::length("Ring::decode", bs.len(), self.byte_len())?;
        let mut z = self.create();
        self.decode_bytes(bs, &mut z);
        Ok(z)
    }

    /// Encode into a freshly allocated wire buffer
    pub fn encode(&self, x: &Element) -> Vec<u8> {
        let mut bs = vec![0u8; self.byte_len()];
        self.encode_bytes(x, &mut bs);
        bs
    }

    /// All `r` coefficients as one byte each (0 or 1), for diagnostics
    pub fn encode_bits(&self, x: &Element) -> Vec<u8> {
        debug_assert_eq!(x.len(), self.size);
        (0..self.bits as usize).map(|i| x.bit(i)).collect()
    }
}
