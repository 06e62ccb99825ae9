//! Key derivation functions
//!
//! The SM3 counter-mode KDF of GB/T 32918.4, both as a one-shot derivation
//! and as the streaming session SM2 encryption runs on.

use alloc::vec::Vec;

use crate::error::Result;

pub mod sm3kdf;

pub use sm3kdf::{SessionState, Sm3Kdf};

/// Static description of a KDF
pub trait KdfAlgorithm {
    /// Output size of one derivation block in bytes
    const BLOCK_OUTPUT_SIZE: usize;

    /// Largest output the KDF can produce
    const MAX_OUTPUT_SIZE: u64;

    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Derivation of arbitrary-length keying material from a shared secret
pub trait KeyDerivationFunction {
    /// The algorithm this KDF implements
    type Algorithm: KdfAlgorithm;

    /// Stretch `secret` to `length` bytes
    fn derive_key(secret: &[u8], length: usize) -> Result<Vec<u8>>;
}
