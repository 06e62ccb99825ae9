//! SM2 scalars
//!
//! Integers in [1, n − 1] where n is the order of the base point. Scalars
//! are never reduced silently: out-of-range encodings are rejected.

use subtle::{ConstantTimeEq, ConstantTimeLess};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::constants::SM2_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use smcrypt_common::security::SecretBuffer;
use smcrypt_params::traditional::sm2::SM2_P256V1;

/// Non-zero scalar below the group order
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<SM2_SCALAR_SIZE>);

impl Scalar {
    /// Wrap 32 big-endian bytes, rejecting zero and values ≥ n
    pub fn new(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let buffer = SecretBuffer::new(data);
        if Self::is_zero_bytes(buffer.as_array()) {
            return Err(Error::param("SM2 scalar", "scalar cannot be zero"));
        }
        if !Self::below_order(buffer.as_array()) {
            return Err(Error::param("SM2 scalar", "scalar is not below the group order"));
        }
        Ok(Scalar(buffer))
    }

    /// Validate and wrap an existing secret buffer
    pub fn from_secret_buffer(buffer: SecretBuffer<SM2_SCALAR_SIZE>) -> Result<Self> {
        Self::new(*buffer.as_array())
    }

    /// Access the underlying buffer
    pub fn as_secret_buffer(&self) -> &SecretBuffer<SM2_SCALAR_SIZE> {
        &self.0
    }

    /// Big-endian encoding
    pub fn serialize(&self) -> [u8; SM2_SCALAR_SIZE] {
        *self.0.as_array()
    }

    /// Decode from a slice of exactly 32 bytes
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 scalar", bytes.len(), SM2_SCALAR_SIZE)?;
        let mut tmp = [0u8; SM2_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);
        let result = Self::new(tmp);
        tmp.zeroize();
        result
    }

    /// Always false for a constructed scalar
    pub fn is_zero(&self) -> bool {
        Self::is_zero_bytes(self.0.as_array())
    }

    fn is_zero_bytes(bytes: &[u8; SM2_SCALAR_SIZE]) -> bool {
        bytes[..].ct_eq(&[0u8; SM2_SCALAR_SIZE][..]).into()
    }

    /// Constant-time big-endian comparison against n
    fn below_order(bytes: &[u8; SM2_SCALAR_SIZE]) -> bool {
        let order = &SM2_P256V1.n;
        let mut lt = subtle::Choice::from(0);
        let mut eq = subtle::Choice::from(1);
        for (x, y) in bytes.iter().zip(order.iter()) {
            lt |= eq & x.ct_lt(y);
            eq &= x.ct_eq(y);
        }
        lt.into()
    }
}
