//! Error type definitions for cryptographic operations

use alloc::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material that cannot be decoded or is out of range
    InvalidKey {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },

    /// Decryption failed
    DecryptionFailed {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },

    /// Ciphertext is malformed
    InvalidCiphertext {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Where the error was raised
        context: &'static str,
        /// Length required
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },

    /// Encoding or decoding error (hex, point encoding)
    SerializationError {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },

    /// Not implemented error
    NotImplemented {
        /// Name of the missing feature
        feature: &'static str,
    },

    /// An integrity tag did not match
    AuthenticationFailed {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },

    /// Other error
    Other {
        /// Where the error was raised
        context: &'static str,
        /// Additional detail
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::DecryptionFailed { context, message } => {
                write!(f, "Decryption failed: {}: {}", context, message)
            }
            Self::InvalidCiphertext { context, message } => {
                write!(f, "Invalid ciphertext: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            }
            Self::AuthenticationFailed { context, message } => {
                write!(f, "Authentication failed: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
