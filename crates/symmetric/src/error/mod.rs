//! Error handling for symmetric cryptographic operations
//!
//! Uses the API error system and adds conversions for errors raised by the
//! SM4 primitives.

// Re-export the primary API error system
pub use smcrypt_api::error::{validate, Error, Result};

use alloc::format;
use alloc::string::ToString;
use smcrypt_algorithms::error::Error as PrimitiveError;

// Helper functions to convert errors (instead of From impls which violate orphan rules)

/// Convert a PrimitiveError to an API Error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    match err {
        PrimitiveError::Padding { context } => Error::InvalidCiphertext {
            context,
            message: "padding is malformed".to_string(),
        },
        PrimitiveError::Length {
            context: context @ ("ECB ciphertext" | "CBC ciphertext"),
            actual,
            ..
        } => Error::InvalidCiphertext {
            context,
            message: format!("{} bytes is not a whole number of blocks", actual),
        },
        other => other.into(),
    }
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }
}

// Also implement for API results (like SecretBytes operations)
impl<T> SymmetricResultExt<T> for core::result::Result<T, Error> {
    fn map_primitive_err(self) -> Result<T> {
        self
    }
}

/// Validate key or IV material with consistent context
pub fn validate_material(actual: usize, context: &'static str, expected: usize) -> Result<()> {
    validate::length(context, actual, expected)
}
