//! Inversion by addition-chain exponentiation
//!
//! When 2 is primitive modulo `r` (true for every BIKE block length) the
//! units of R form a group whose order divides `2^(r-1) - 1`, so
//! `a^-1 = a^(2^(r-1) - 2) = (a^(2^(r-2) - 1))^2`. The exponent
//! `2^(r-2) - 1` is a run of `r - 2` one bits. Runs of length `2^i` are
//! built by doubling (`f * f^(2^(2^(i-1)))`) and appended to the
//! accumulator wherever bit `i` of `r - 2` is set. That costs
//! `O(log r)` multiplications and `O(r)` squarings.

use super::{Element, Ring};
use crate::error::{validate, Result};
use subtle::ConstantTimeEq;

impl Ring {
    /// `z = a^-1`
    ///
    /// `a` must be a unit of R. A non-invertible input produces an
    /// unspecified element; nothing about `a` is tested, so the running time
    /// depends on `r` only. Use [`inv_checked`](Self::inv_checked) when the
    /// input is not known to be invertible.
    pub fn inv(&self, a: &Element, z: &mut Element) {
        debug_assert_eq!(a.len(), self.size);

        // GF(2): the only unit is 1
        if self.bits < 3 {
            self.copy(a, z);
            return;
        }

        let mut f = a.clone();
        let mut g = self.create();
        let mut t = a.clone();

        let r_sub2 = self.bits - 2;
        let bits = 32 - r_sub2.leading_zeros();

        for i in 1..bits {
            self.square_n(&f, 1 << (i - 1), &mut g);
            self.multiply_in_place(&mut f, &g);

            if r_sub2 & (1 << i) != 0 {
                let n = r_sub2 & ((1 << i) - 1);
                self.square_n(&f, n as usize, &mut g);
                self.multiply_in_place(&mut t, &g);
            }
        }

        self.square(&t, z);
    }

    /// `a^-1`, verified by multiplying back
    ///
    /// The inverse and the check are computed unconditionally; only the
    /// final verdict branches. Fails with a processing error if `a` is not
    /// a unit.
    pub fn inv_checked(&self, a: &Element) -> Result<Element> {
        let mut z = self.create();
        self.inv(a, &mut z);

        let mut check = self.create();
        self.multiply(a, &z, &mut check);
        let ok = check.ct_eq(&self.one());
        if !bool::from(ok) {
            tracing::debug!(r = self.bits, "inversion check failed");
        }
        validate::ct_check(ok, "inversion", "element is not invertible")?;
        Ok(z)
    }
}
