//! SM4 in ECB and CBC modes
//!
//! [`Sm4Ecb`] and [`Sm4Cbc`] bind a key and a padding scheme. The string
//! helpers in this module accept the key and IV either as raw UTF-8 text
//! or as hex, and return uppercase hex ciphertext.

use alloc::vec::Vec;
use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use smcrypt_algorithms::block::{BlockCipher, Cbc, Ecb, Padding, Sm4};
use smcrypt_algorithms::types::{Nonce, SecretBytes};
use smcrypt_params::utils::symmetric::{SM4_BLOCK_SIZE, SM4_KEY_SIZE};

use crate::cipher::{IvCipher, SymmetricCipher};
use crate::error::{validate_material, Result, SymmetricResultExt};

mod facade;
pub use facade::{decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb};

/// SM4 initialization vector
pub type Sm4Iv = Nonce<SM4_BLOCK_SIZE>;

/// 128-bit SM4 key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm4Key(SecretBytes<SM4_KEY_SIZE>);

impl Sm4Key {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; SM4_KEY_SIZE]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Copy a slice of exactly 16 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate_material(bytes.len(), "SM4 key", SM4_KEY_SIZE)?;
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    /// Generate a random key
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(Sm4::generate_key(rng))
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Debug for Sm4Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sm4Key([REDACTED])")
    }
}

/// SM4 in electronic codebook mode
///
/// Equal plaintext blocks give equal ciphertext blocks.
#[derive(Clone)]
pub struct Sm4Ecb {
    mode: Ecb<Sm4>,
}

impl Sm4Ecb {
    /// Selects the padding scheme (PKCS#7 by default)
    pub fn with_padding(self, padding: Padding) -> Self {
        Self {
            mode: self.mode.with_padding(padding),
        }
    }
}

impl SymmetricCipher for Sm4Ecb {
    type Key = Sm4Key;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self {
            mode: Ecb::new(Sm4::new(&key.0)),
        })
    }

    fn name() -> &'static str {
        "SM4-ECB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.mode.encrypt(plaintext).map_primitive_err()
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.mode.decrypt(ciphertext).map_primitive_err()
    }
}

/// SM4 in cipher block chaining mode
#[derive(Clone)]
pub struct Sm4Cbc {
    cipher: Sm4,
    padding: Padding,
}

impl Sm4Cbc {
    /// Selects the padding scheme (PKCS#7 by default)
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn chain(&self, iv: &Sm4Iv) -> Result<Cbc<Sm4>> {
        Ok(Cbc::new(self.cipher.clone(), iv)
            .map_primitive_err()?
            .with_padding(self.padding))
    }
}

impl IvCipher for Sm4Cbc {
    type Key = Sm4Key;
    type Iv = Sm4Iv;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self {
            cipher: Sm4::new(&key.0),
            padding: Padding::default(),
        })
    }

    fn name() -> &'static str {
        "SM4-CBC"
    }

    fn encrypt(&self, iv: &Self::Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.chain(iv)?.encrypt(plaintext).map_primitive_err()
    }

    fn decrypt(&self, iv: &Self::Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.chain(iv)?.decrypt(ciphertext).map_primitive_err()
    }

    fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Iv {
        Nonce::random(rng)
    }
}

#[cfg(test)]
mod tests;
