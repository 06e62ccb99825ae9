//! Type-safe wrappers for cryptographic values
//!
//! Fixed-size digest and IV types with size guarantees checked at compile
//! time where possible and at construction otherwise.

pub mod digest;
pub mod nonce;

pub(crate) mod sealed;

pub use digest::Digest;
pub use nonce::Nonce;

pub use smcrypt_api::types::SecretBytes;

pub use smcrypt_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

pub use digest::Sm3Compatible;
pub use nonce::Sm4Compatible;

use alloc::vec::Vec;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

/// Trait for types that can be serialized to a byte representation
pub trait ByteSerializable: Sized {
    /// Convert to a byte vector
    fn to_bytes(&self) -> Vec<u8>;

    /// Try to create from a byte slice
    fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self>;
}
