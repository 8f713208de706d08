//! Testing utilities for the bikering library
pub mod constant_time;
pub mod fixtures;
