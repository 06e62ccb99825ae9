//! Block cipher implementations
//!
//! The SM4 block cipher together with the ECB and CBC modes and PKCS#7
//! padding. Ciphers operate in place on one block at a time; modes own a
//! cipher and handle chaining and padding over whole messages.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod modes;
pub mod padding;
pub mod sm4;

pub use modes::{Cbc, Ecb};
pub use padding::Padding;
pub use sm4::{Sm4, Sm4Algorithm};

/// Compile-time description of a block cipher
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A keyed block cipher
pub trait BlockCipher: Sized {
    /// Type-level constants for this cipher
    type Algorithm: CipherAlgorithm;

    /// Key type
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Expand `key` into a cipher context
    fn new(key: &Self::Key) -> Self;

    /// Encrypt a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Draw a fresh random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
