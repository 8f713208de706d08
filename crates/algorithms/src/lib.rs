//! Ring arithmetic for code-based cryptography with constant-time implementation
//!
//! This crate implements the polynomial ring GF(2)[x]/(x^r - 1) that the
//! BIKE key encapsulation mechanism is built on. Every operation on ring
//! elements runs in time that depends only on the public block length `r`.
//!
//! # Security Features
//!
//! - Branch-free, table-scan word multiplication
//! - Constant-time element comparison
//! - Automatic zeroization of elements and scratch buffers
//!
//! ```
//! use bikering_algorithms::Ring;
//!
//! let ring = Ring::new(13)?;
//! let x = ring.from_indices(&[1])?;
//! let mut z = ring.create();
//! ring.square(&x, &mut z);
//! assert_eq!(z, ring.from_indices(&[2])?);
//! # Ok::<(), bikering_algorithms::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Code-based primitives
#[cfg(feature = "alloc")]
pub mod code;
#[cfg(feature = "alloc")]
pub use code::{Element, Ring};
