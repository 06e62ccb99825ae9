//! SM3 cryptographic hash (GB/T 32905-2016)
//!
//! A Merkle–Damgård hash with a 512-bit block and a 256-bit chaining
//! value. The compression function expands each block into 68 + 64 words
//! and runs 64 rounds over eight working registers.
//!
//! `finalize` leaves the hasher reset to the initial vector so one
//! instance can digest several unrelated messages in sequence.

use alloc::string::{String, ToString};
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

use smcrypt_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use smcrypt_params::utils::hash::{SM3_BLOCK_SIZE, SM3_IV, SM3_OUTPUT_SIZE};

/// Round constant for rounds 0..16
const T_LOW: u32 = 0x79cc_4519;
/// Round constant for rounds 16..64
const T_HIGH: u32 = 0x7a87_9d8a;

/// Marker type for the SM3 algorithm
pub enum Sm3Algorithm {}

impl HashAlgorithm for Sm3Algorithm {
    const OUTPUT_SIZE: usize = SM3_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SM3_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SM3";
}

/// SM3 hash state
#[derive(Clone, Zeroize)]
pub struct Sm3 {
    state: [u32; 8],
    buffer: [u8; SM3_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sm3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

#[inline(always)]
fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

impl Sm3 {
    /// Creates a hasher loaded with the SM3 initial vector
    pub fn new() -> Self {
        Sm3 {
            state: SM3_IV,
            buffer: [0u8; SM3_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    /// Discards all absorbed input and restores the initial vector
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = SM3_IV;
    }

    /// Independent copy of the current mid-message state.
    ///
    /// Feeding the copy never affects `self`. The KDF uses this to branch
    /// one counter block off a seeded state.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Number of message bytes absorbed since the last reset
    pub fn absorbed(&self) -> u64 {
        self.total_bytes + self.buffer_idx as u64
    }

    /// Finalizes into a 32-byte digest and resets the hasher
    pub fn digest_reset(&mut self) -> Digest<SM3_OUTPUT_SIZE> {
        let out = self.finalize_internal();
        self.reset();
        Digest::new(out)
    }

    fn compress(state: &mut [u32; 8], block: &[u8; SM3_BLOCK_SIZE]) {
        let mut w = EphemeralSecret::new([0u32; 68]);
        let mut w1 = EphemeralSecret::new([0u32; 64]);

        compiler_fence(Ordering::SeqCst);

        for i in 0..16 {
            w[i] = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..68 {
            w[i] = p1(w[i - 16] ^ w[i - 9] ^ w[i - 3].rotate_left(15))
                ^ w[i - 13].rotate_left(7)
                ^ w[i - 6];
        }
        for i in 0..64 {
            w1[i] = w[i] ^ w[i + 4];
        }

        let mut working_vars = *state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let mut a = guard[0];
        let mut b = guard[1];
        let mut c = guard[2];
        let mut d = guard[3];
        let mut e = guard[4];
        let mut f = guard[5];
        let mut g = guard[6];
        let mut h = guard[7];

        for j in 0..64 {
            let t = if j < 16 { T_LOW } else { T_HIGH };
            let a12 = a.rotate_left(12);
            let ss1 = a12
                .wrapping_add(e)
                .wrapping_add(t.rotate_left((j % 32) as u32))
                .rotate_left(7);
            let ss2 = ss1 ^ a12;
            let tt1 = ff(j, a, b, c)
                .wrapping_add(d)
                .wrapping_add(ss2)
                .wrapping_add(w1[j]);
            let tt2 = gg(j, e, f, g)
                .wrapping_add(h)
                .wrapping_add(ss1)
                .wrapping_add(w[j]);

            d = c;
            c = b.rotate_left(9);
            b = a;
            a = tt1;
            h = g;
            g = f.rotate_left(19);
            f = e;
            e = p0(tt2);
        }

        guard[0] = a;
        guard[1] = b;
        guard[2] = c;
        guard[3] = d;
        guard[4] = e;
        guard[5] = f;
        guard[6] = g;
        guard[7] = h;

        for (s, v) in state.iter_mut().zip(guard.iter()) {
            *s ^= *v;
        }

        compiler_fence(Ordering::SeqCst);
    }

    pub(crate) fn update_internal(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SM3_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SM3_BLOCK_SIZE {
                let block = self.buffer;
                Self::compress(&mut self.state, &block);
                self.total_bytes += SM3_BLOCK_SIZE as u64;
                self.buffer_idx = 0;
            }
        }
    }

    fn finalize_internal(&mut self) -> [u8; SM3_OUTPUT_SIZE] {
        self.total_bytes += self.buffer_idx as u64;
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= SM3_BLOCK_SIZE - 8 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let block = self.buffer;
            Self::compress(&mut self.state, &block);
            self.buffer = [0u8; SM3_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..SM3_BLOCK_SIZE - 8] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[SM3_BLOCK_SIZE - 8..], bit_len);
        let block = self.buffer;
        Self::compress(&mut self.state, &block);

        let mut out = [0u8; SM3_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        out
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureZeroingType for Sm3 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sm3 {
    type Algorithm = Sm3Algorithm;
    type Output = Digest<SM3_OUTPUT_SIZE>;

    fn new() -> Self {
        Sm3::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        Ok(self.digest_reset())
    }

    fn output_size() -> usize {
        SM3_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SM3_BLOCK_SIZE
    }

    fn name() -> String {
        Sm3Algorithm::ALGORITHM_ID.to_string()
    }
}

#[cfg(test)]
mod tests;
