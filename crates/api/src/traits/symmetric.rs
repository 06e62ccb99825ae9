//! Trait for keyed symmetric ciphers with a padded byte-oriented interface

use crate::Result;
use alloc::vec::Vec;

/// A symmetric cipher bound to a key, encrypting whole messages
pub trait SymmetricCipher: Sized {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>;

    /// Returns the name of this cipher
    fn name() -> &'static str;

    /// Encrypts a message, applying padding when the mode requires it
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a message produced by [`SymmetricCipher::encrypt`]
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
