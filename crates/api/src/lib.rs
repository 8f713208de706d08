//! Public API types for the bikering library
//!
//! This crate provides the error surface shared by every bikering crate:
//! the [`Error`] enum, the [`Result`] alias and the [`ResultExt`] helpers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
