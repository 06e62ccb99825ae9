//! Electronic Codebook (ECB) mode
//!
//! Blocks are encrypted independently. Equal plaintext blocks give equal
//! ciphertext blocks, so ECB is offered only for interoperability.

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::padding::{pkcs7_pad, pkcs7_unpad, Padding};
use super::super::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
    #[zeroize(skip)]
    padding: Padding,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Creates an ECB context with PKCS#7 padding
    pub fn new(cipher: B) -> Self {
        Self {
            cipher,
            padding: Padding::Pkcs7,
        }
    }

    /// Selects the padding scheme
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Encrypts a message
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let bs = B::block_size();
        let mut buf = match self.padding {
            Padding::Pkcs7 => pkcs7_pad(plaintext, bs),
            Padding::None => {
                validate::block_multiple("ECB plaintext", plaintext.len(), bs)?;
                plaintext.to_vec()
            }
        };
        for block in buf.chunks_mut(bs) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(buf)
    }

    /// Decrypts a message and strips its padding
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let bs = B::block_size();
        validate::block_multiple("ECB ciphertext", ciphertext.len(), bs)?;

        let mut buf = ciphertext.to_vec();
        for block in buf.chunks_mut(bs) {
            self.cipher.decrypt_block(block)?;
        }

        match self.padding {
            Padding::Pkcs7 => {
                let out = pkcs7_unpad(&buf, bs, "ECB");
                buf.zeroize();
                out
            }
            Padding::None => Ok(buf),
        }
    }
}
