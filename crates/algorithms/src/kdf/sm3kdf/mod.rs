//! SM3 counter-mode KDF and the SM2 cipher session built on it
//!
//! `KDF(Z, klen)` concatenates `SM3(Z ‖ ct)` for a 32-bit big-endian
//! counter `ct` starting at 1 and truncates to `klen` bytes.
//!
//! [`Sm3Kdf`] streams that keystream for `Z = x2 ‖ y2` without buffering
//! the message. It absorbs `Z` once and branches a snapshot of the seeded
//! SM3 state per counter block. Alongside it accumulates the integrity tag
//! `C3 = SM3(x2 ‖ M ‖ y2)`.
//!
//! Session lifecycle: `Idle → Seeded → Streaming → Finalizing → Seeded`,
//! and back to `Idle` on [`Sm3Kdf::wipe`] or drop.

use alloc::vec::Vec;
use zeroize::Zeroize;

use super::{KdfAlgorithm, KeyDerivationFunction};
use crate::error::{Error, Result};
use crate::hash::Sm3;
use crate::types::Digest;
use smcrypt_params::traditional::sm2::SM2_FIELD_ELEMENT_SIZE;
use smcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// Type-level constants for the SM3 KDF
pub enum Sm3KdfAlgorithm {}

impl KdfAlgorithm for Sm3KdfAlgorithm {
    const BLOCK_OUTPUT_SIZE: usize = SM3_OUTPUT_SIZE;
    const MAX_OUTPUT_SIZE: u64 = (u32::MAX as u64) * SM3_OUTPUT_SIZE as u64;
    const ALGORITHM_ID: &'static str = "SM3-KDF";
}

/// Lifecycle of a cipher session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Wiped; no shared point loaded
    Idle,
    /// Seeded with x2 ‖ y2, no keystream consumed
    Seeded,
    /// Keystream partially consumed
    Streaming,
    /// Tag being written; returns to `Seeded` when done
    Finalizing,
}

/// Which side of the XOR the tag absorbs
#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Streaming SM3-KDF cipher session for one SM2 operation
#[derive(Clone)]
pub struct Sm3Kdf {
    seeded: Sm3,
    tag_seed: Sm3,
    tag: Sm3,
    block: [u8; SM3_OUTPUT_SIZE],
    offset: usize,
    counter: u32,
    y2: [u8; SM2_FIELD_ELEMENT_SIZE],
    keystream_or: u8,
    state: SessionState,
}

impl Sm3Kdf {
    /// Seed a session from the shared point coordinates
    pub fn new(x2: &[u8; SM2_FIELD_ELEMENT_SIZE], y2: &[u8; SM2_FIELD_ELEMENT_SIZE]) -> Self {
        let mut session = Sm3Kdf {
            seeded: Sm3::new(),
            tag_seed: Sm3::new(),
            tag: Sm3::new(),
            block: [0u8; SM3_OUTPUT_SIZE],
            offset: SM3_OUTPUT_SIZE,
            counter: 1,
            y2: [0u8; SM2_FIELD_ELEMENT_SIZE],
            keystream_or: 0,
            state: SessionState::Idle,
        };
        session.seed(x2, y2);
        session
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Load new coordinates, discarding all progress
    pub fn seed(&mut self, x2: &[u8; SM2_FIELD_ELEMENT_SIZE], y2: &[u8; SM2_FIELD_ELEMENT_SIZE]) {
        self.wipe();
        self.seeded.update_internal(x2);
        self.seeded.update_internal(y2);
        self.tag_seed.update_internal(x2);
        self.tag = self.tag_seed.snapshot();
        self.y2 = *y2;
        self.state = SessionState::Seeded;
    }

    /// XOR keystream into `data`, absorbing the plaintext into the tag first
    pub fn encrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data, Direction::Encrypt)
    }

    /// XOR keystream into `data`, absorbing the recovered plaintext
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data, Direction::Decrypt)
    }

    /// True when every keystream byte produced so far was zero
    ///
    /// Always true before any keystream has been drawn.
    pub fn keystream_is_zero(&self) -> bool {
        self.keystream_or == 0
    }

    /// Write `C3 = SM3(x2 ‖ M ‖ y2)` and re-seed for another message
    /// under the same shared point.
    pub fn finalize_tag(&mut self) -> Result<Digest<SM3_OUTPUT_SIZE>> {
        if self.state == SessionState::Idle {
            return Err(Error::Processing {
                operation: "SM3-KDF",
                details: "session is not seeded",
            });
        }
        self.state = SessionState::Finalizing;

        self.tag.update_internal(&self.y2);
        let c3 = self.tag.digest_reset();

        self.tag = self.tag_seed.snapshot();
        self.block.zeroize();
        self.offset = SM3_OUTPUT_SIZE;
        self.counter = 1;
        self.keystream_or = 0;
        self.state = SessionState::Seeded;
        Ok(c3)
    }

    /// Zeroize all session secrets and return to `Idle`
    pub fn wipe(&mut self) {
        self.seeded.reset();
        self.tag_seed.reset();
        self.tag.reset();
        self.block.zeroize();
        self.y2.zeroize();
        self.offset = SM3_OUTPUT_SIZE;
        self.counter = 1;
        self.keystream_or = 0;
        self.state = SessionState::Idle;
    }

    fn apply(&mut self, data: &mut [u8], direction: Direction) -> Result<()> {
        if self.state == SessionState::Idle {
            return Err(Error::Processing {
                operation: "SM3-KDF",
                details: "session is not seeded",
            });
        }
        if data.is_empty() {
            return Ok(());
        }
        self.state = SessionState::Streaming;

        if let Direction::Encrypt = direction {
            self.tag.update_internal(data);
        }
        for byte in data.iter_mut() {
            if self.offset == SM3_OUTPUT_SIZE {
                self.next_block()?;
            }
            let k = self.block[self.offset];
            self.keystream_or |= k;
            *byte ^= k;
            self.offset += 1;
        }
        if let Direction::Decrypt = direction {
            self.tag.update_internal(data);
        }
        Ok(())
    }

    /// Hash the seeded state ‖ counter into the keystream block
    fn next_block(&mut self) -> Result<()> {
        if self.counter == 0 {
            return Err(Error::Processing {
                operation: "SM3-KDF",
                details: "counter exhausted",
            });
        }
        let mut h = self.seeded.snapshot();
        h.update_internal(&self.counter.to_be_bytes());
        self.block = h.digest_reset().into_bytes();
        self.offset = 0;
        self.counter = self.counter.wrapping_add(1);
        Ok(())
    }
}

impl Drop for Sm3Kdf {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl KeyDerivationFunction for Sm3Kdf {
    type Algorithm = Sm3KdfAlgorithm;

    fn derive_key(secret: &[u8], length: usize) -> Result<Vec<u8>> {
        derive_key(secret, length)
    }
}

/// One-shot `KDF(Z, klen)`
pub fn derive_key(z: &[u8], length: usize) -> Result<Vec<u8>> {
    if length as u64 > Sm3KdfAlgorithm::MAX_OUTPUT_SIZE {
        return Err(Error::param("length", "exceeds (2^32 - 1) SM3 blocks"));
    }

    let mut seeded = Sm3::new();
    seeded.update_internal(z);

    let mut out = Vec::with_capacity(length + SM3_OUTPUT_SIZE);
    let mut counter: u32 = 1;
    while out.len() < length {
        let mut h = seeded.snapshot();
        h.update_internal(&counter.to_be_bytes());
        out.extend_from_slice(h.digest_reset().as_ref());
        counter = counter.wrapping_add(1);
    }
    out.truncate(length);
    Ok(out)
}
