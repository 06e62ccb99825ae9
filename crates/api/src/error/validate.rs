//! Validation helpers that produce API errors

use super::types::{Error, Result};

/// Fail with `InvalidLength` unless `actual == expected`
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
