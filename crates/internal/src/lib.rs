//! Internal utilities shared by the bikering crates
//!
//! Nothing in here is part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
