//! Error handling for SM2 encryption

#[cfg(not(feature = "std"))]
use core::fmt;

use alloc::string::ToString;
use smcrypt_algorithms::error::Error as PrimitiveError;
use smcrypt_api::error::Error as CoreError;

/// Error type for SM2 operations.
#[derive(Debug)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Failure reported by a primitive (curve, KDF, hash)
    #[cfg_attr(feature = "std", error("SM2 primitive error: {0}"))]
    Primitive(#[cfg_attr(feature = "std", source)] PrimitiveError),
    /// Error already expressed in the public API type
    #[cfg_attr(feature = "std", error("SM2 API error: {0}"))]
    Api(#[cfg_attr(feature = "std", source)] CoreError),
    /// Ciphertext cannot be split into C1, C2 and C3
    #[cfg_attr(feature = "std", error("Invalid SM2 ciphertext format: {0}"))]
    InvalidCiphertextFormat(&'static str),
    /// Key material is undecodable or out of range
    #[cfg_attr(feature = "std", error("Invalid SM2 key: {0}"))]
    InvalidKey(&'static str),
    /// Encryption could not complete
    #[cfg_attr(feature = "std", error("SM2 encryption failed: {0}"))]
    EncryptionFailed(&'static str),
    /// Decryption could not complete
    #[cfg_attr(feature = "std", error("SM2 decryption failed: {0}"))]
    DecryptionFailed(&'static str),
    /// Operation SM2 does not support
    #[cfg_attr(feature = "std", error("SM2 unsupported operation: {0}"))]
    UnsupportedOperation(&'static str),
    /// Hex or key encoding failed
    #[cfg_attr(feature = "std", error("SM2 serialization error: {0}"))]
    SerializationError(&'static str),
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "SM2 primitive error: {}", e),
            Error::Api(e) => write!(f, "SM2 API error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid SM2 ciphertext format: {}", reason)
            }
            Error::InvalidKey(reason) => write!(f, "Invalid SM2 key: {}", reason),
            Error::EncryptionFailed(reason) => write!(f, "SM2 encryption failed: {}", reason),
            Error::DecryptionFailed(reason) => write!(f, "SM2 decryption failed: {}", reason),
            Error::UnsupportedOperation(op) => write!(f, "SM2 unsupported operation: {}", op),
            Error::SerializationError(reason) => write!(f, "SM2 serialization error: {}", reason),
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Error::SerializationError("malformed hexadecimal input")
    }
}

// Conversion from SM2 Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "SM2",
                message: reason.to_string(),
            },
            Error::InvalidKey(reason) => CoreError::InvalidKey {
                context: "SM2",
                message: reason.to_string(),
            },
            Error::EncryptionFailed(reason) => CoreError::Other {
                context: "SM2 Encryption",
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed {
                context: "SM2 Decryption",
                message: reason.to_string(),
            },
            Error::UnsupportedOperation(op) => CoreError::NotImplemented { feature: op },
            Error::SerializationError(reason) => CoreError::SerializationError {
                context: "SM2",
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for SM2 operations.
pub type Result<T> = core::result::Result<T, Error>;
