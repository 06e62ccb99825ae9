//! Validation utilities for cryptographic primitives

use super::{Error, Result};

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

/// Validate that `actual` is a multiple of `block`
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block: usize) -> Result<()> {
    if actual % block != 0 {
        return Err(Error::Length {
            context,
            expected: (actual / block + 1) * block,
            actual,
        });
    }
    Ok(())
}

/// Fail with `Authentication` unless the tag check passed
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
