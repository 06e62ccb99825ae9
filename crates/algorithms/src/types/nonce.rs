//! Initialization vectors for chaining modes
//!
//! An IV is public, so `Debug` prints it in hex. Equality still goes
//! through the constant-time path to keep one comparison rule for every
//! byte wrapper in this crate.

use core::fmt;
use core::ops::Deref;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;
use crate::types::{ConstantTimeEq, FixedSize, SecureZeroingType};

/// `N`-byte IV; SM4-CBC uses `Nonce<16>`
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Wrap an array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// The all-zero IV
    pub fn zeroed() -> Self {
        Self::new([0u8; N])
    }

    /// Copy exactly `N` bytes out of `slice`
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("initialization vector", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self::new(data))
    }

    /// Fresh IV from `rng`
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut iv = Self::zeroed();
        rng.fill_bytes(&mut iv.data);
        iv
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> ConstantTimeEq for Nonce<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        smcrypt_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        ConstantTimeEq::ct_eq(self, other)
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({})", N, hex::encode(self.data))
    }
}

impl<const N: usize> SecureZeroingType for Nonce<N> {
    fn zeroed() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> FixedSize for Nonce<N> {
    fn size() -> usize {
        N
    }
}

/// IV sizes accepted by SM4 chaining modes
pub trait Sm4Compatible: Sealed {}
impl Sm4Compatible for Nonce<16> {}
