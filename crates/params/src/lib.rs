//! Constant values for the bikering library

#![no_std]

pub mod pqc;
