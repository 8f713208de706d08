//! Operand generators and reference arithmetic shared by the test suites

use bikering_algorithms::{Element, Ring};
use rand::{CryptoRng, RngCore};

/// Uniformly random element
pub fn random_element<R: RngCore + CryptoRng>(ring: &Ring, rng: &mut R) -> Element {
    let mut bytes = vec![0u8; ring.byte_len()];
    rng.fill_bytes(&mut bytes);
    ring.decode(&bytes).expect("buffer has the encoded length")
}

/// Random element of odd weight, excluding the all-ones polynomial
///
/// When 2 is primitive modulo r these are exactly the units of the ring.
pub fn random_unit<R: RngCore + CryptoRng>(ring: &Ring, rng: &mut R) -> Element {
    loop {
        let mut a = random_element(ring, rng);
        if ring.weight(&a) % 2 == 0 {
            a.as_words_mut()[0] ^= 1;
        }
        if ring.weight(&a) != ring.bits() {
            return a;
        }
    }
}

/// Element from little-endian words, masking off anything at or above r
///
/// Missing words are zero, surplus words are ignored.
pub fn element_from_words(ring: &Ring, words: &[u64]) -> Element {
    let mut buf = vec![0u64; ring.size()];
    for (b, w) in buf.iter_mut().zip(words) {
        *b = *w;
    }
    let partial = ring.bits() & 63;
    buf[ring.size() - 1] &= u64::MAX >> (64 - partial);
    ring.from_words(&buf).expect("top word is masked")
}

/// Product by direct convolution modulo x^r - 1, one coefficient at a time
pub fn multiply_reference(ring: &Ring, x: &Element, y: &Element) -> Element {
    let r = ring.bits() as usize;
    let xs = ring.encode_bits(x);
    let ys = ring.encode_bits(y);
    let mut positions = Vec::new();
    for i in (0..r).filter(|&i| xs[i] == 1) {
        for j in (0..r).filter(|&j| ys[j] == 1) {
            positions.push(((i + j) % r) as u32);
        }
    }
    ring.from_indices(&positions).expect("positions are below r")
}

/// Square-and-multiply power, for checking the addition chain
pub fn pow_reference(ring: &Ring, a: &Element, mut e: u64) -> Element {
    let mut base = a.clone();
    let mut acc = ring.one();
    while e != 0 {
        if e & 1 == 1 {
            ring.multiply_in_place(&mut acc, &base);
        }
        ring.square_in_place(&mut base);
        e >>= 1;
    }
    acc
}
