//! Symmetric cipher traits for smcrypt-symmetric
//!
//! Whole-message ciphers implement [`SymmetricCipher`] from the API crate.
//! Modes that take an initialization vector per message implement
//! [`IvCipher`] instead.

use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub use smcrypt_api::traits::SymmetricCipher;

/// Trait for ciphers that chain from a caller-supplied IV
pub trait IvCipher: Sized {
    /// The key type used by this cipher
    type Key;

    /// The IV type used by this cipher
    type Iv;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>;

    /// Returns the name of this cipher
    fn name() -> &'static str;

    /// Encrypts plaintext under the given IV
    fn encrypt(&self, iv: &Self::Iv, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts ciphertext under the given IV
    fn decrypt(&self, iv: &Self::Iv, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Generates a random IV
    fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Iv;
}
