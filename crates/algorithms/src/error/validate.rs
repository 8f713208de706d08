//! Validation utilities for ring primitives

use super::{Error, Result};
use subtle::Choice;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a buffer invariant
#[inline(always)]
pub fn contract(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Contract { context, details });
    }
    Ok(())
}

/// Turn the verdict of a constant-time check into a `Result`
///
/// Only the final, already-computed `Choice` is branched on.
#[inline(always)]
pub fn ct_check(ok: Choice, operation: &'static str, details: &'static str) -> Result<()> {
    if !bool::from(ok) {
        return Err(Error::Processing { operation, details });
    }
    Ok(())
}
