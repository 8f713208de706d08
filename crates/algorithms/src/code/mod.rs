//! Code-Based Cryptography Primitives
//!
//! Mathematical building blocks for code-based cryptosystems. BIKE works
//! with quasi-cyclic codes whose blocks are elements of the ring
//! GF(2)[x]/(x^r - 1), implemented in [`bike_ring`].

pub mod bike_ring;

pub use bike_ring::{Element, Ring};
