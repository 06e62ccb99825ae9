//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. Plaintext is padded
//! per the configured [`Padding`] before chaining.

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::padding::{pkcs7_pad, pkcs7_unpad, Padding};
use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::{Nonce, Sm4Compatible};
use smcrypt_internal::constant_time::xor_in_place;

/// CBC mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Vec<u8>,
    #[zeroize(skip)]
    padding: Padding,
}

impl<B: BlockCipher + Zeroize> Cbc<B> {
    /// Creates a CBC context with PKCS#7 padding
    ///
    /// The IV must be exactly one block long.
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: Sm4Compatible,
    {
        Self::from_iv_slice(cipher, iv.as_ref())
    }

    /// Creates a CBC context from an IV given as a raw slice
    pub fn from_iv_slice(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), B::block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
            padding: Padding::Pkcs7,
        })
    }

    /// Selects the padding scheme
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Encrypts a message
    ///
    /// Without padding the plaintext must be a multiple of the block size.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let bs = B::block_size();
        let mut buf = match self.padding {
            Padding::Pkcs7 => pkcs7_pad(plaintext, bs),
            Padding::None => {
                validate::block_multiple("CBC plaintext", plaintext.len(), bs)?;
                plaintext.to_vec()
            }
        };

        for start in (0..buf.len()).step_by(bs) {
            let (done, rest) = buf.split_at_mut(start);
            let block = &mut rest[..bs];
            if start == 0 {
                xor_in_place(block, &self.iv);
            } else {
                xor_in_place(block, &done[start - bs..]);
            }
            self.cipher.encrypt_block(block)?;
        }

        Ok(buf)
    }

    /// Decrypts a message and strips its padding
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let bs = B::block_size();
        validate::block_multiple("CBC ciphertext", ciphertext.len(), bs)?;

        let mut buf = ciphertext.to_vec();
        for (i, block) in buf.chunks_mut(bs).enumerate() {
            self.cipher.decrypt_block(block)?;
            let prev = if i == 0 {
                &self.iv[..]
            } else {
                &ciphertext[(i - 1) * bs..i * bs]
            };
            xor_in_place(block, prev);
        }

        match self.padding {
            Padding::Pkcs7 => {
                let out = pkcs7_unpad(&buf, bs, "CBC");
                buf.zeroize();
                out
            }
            Padding::None => Ok(buf),
        }
    }
}
