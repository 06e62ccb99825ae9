//! SM-series cryptographic primitives
//!
//! Implementations of the Chinese national-standard algorithms:
//!
//! - SM3 hash (GB/T 32905)
//! - SM4 block cipher with ECB and CBC modes (GB/T 32907)
//! - SM2 curve arithmetic and the SM3 KDF used by SM2 encryption
//!   (GB/T 32918)
//!
//! Secret intermediates are wiped on drop and comparisons of secret data
//! are constant time. The crate works without `std` given an allocator.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub use error::{validate, Error, Result};

#[cfg(feature = "block")]
pub mod block;
#[cfg(feature = "block")]
pub use block::{BlockCipher, Cbc, CipherAlgorithm, Ecb, Padding, Sm4};

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "hash")]
pub use hash::{HashFunction, Sm3};

#[cfg(feature = "kdf")]
pub mod kdf;
#[cfg(feature = "kdf")]
pub use kdf::{KeyDerivationFunction, Sm3Kdf};

#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "ec")]
pub use ec::sm2;

pub mod types;
pub use types::{
    ByteSerializable, ConstantTimeEq, Digest, FixedSize, Nonce, SecretBytes, SecureZeroingType,
};

pub use smcrypt_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

pub use types::{Sm3Compatible, Sm4Compatible};
