//! Fixed-size hash output

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use crate::types::sealed::Sealed;
use crate::types::{ByteSerializable, ConstantTimeEq, FixedSize, SecureZeroingType};

/// A cryptographic digest with a fixed size
#[derive(Clone, Copy, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Sealed for Digest<N> {}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice of exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Length of the digest
    pub fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Copy out the raw bytes
    pub fn into_bytes(self) -> [u8; N] {
        self.data
    }

    /// Lowercase hexadecimal encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Parse a hexadecimal string of exactly `2 * N` digits
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;
        Self::from_slice(&bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        smcrypt_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> SecureZeroingType for Digest<N> {
    fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }
}

impl<const N: usize> FixedSize for Digest<N> {
    fn size() -> usize {
        N
    }
}

impl<const N: usize> ByteSerializable for Digest<N> {
    fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

/// Digest sizes produced by SM3
pub trait Sm3Compatible: Sealed {}
impl Sm3Compatible for Digest<32> {}
