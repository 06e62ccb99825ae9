//! Zeroizing wrappers for secret material
//!
//! [`SecretBuffer`] owns fixed-size key bytes such as an SM2 private
//! scalar. [`EphemeralSecret`] and [`ZeroizeGuard`] cover the short-lived
//! intermediates inside SM3 and SM4: message schedules, working
//! variables and round-key state.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Types with an all-zero state that can be wiped and cloned
pub trait SecureZeroingType: Zeroize + Clone {
    /// The wiped state
    fn zeroed() -> Self;

    /// Clone into a value that keeps the same wiping guarantees
    fn secure_clone(&self) -> Self {
        self.clone()
    }
}

/// `N` secret bytes, wiped on drop and never printed
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Take ownership of `data`
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Copy `slice` if it holds exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let data: [u8; N] = slice.try_into().ok()?;
        Some(Self::new(data))
    }

    /// Borrow as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> SecureZeroingType for SecretBuffer<N> {
    fn zeroed() -> Self {
        Self::new([0u8; N])
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Owned scratch value wiped when it goes out of scope
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Wrap `value`
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EphemeralSecret([REDACTED])")
    }
}

/// Wipes a borrowed value on scope exit, early returns included
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Guard `value` until the guard is dropped
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}
