//! SM4 symmetric encryption for the smcrypt library
//!
//! Keyed ECB and CBC ciphers built on the primitives in smcrypt-algorithms,
//! plus hex-string helpers. Errors use the unified API error system.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cipher;
pub mod error;
pub mod sm4;

// Re-export main types for convenience
pub use cipher::{IvCipher, SymmetricCipher};
pub use sm4::{
    decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb, Sm4Cbc, Sm4Ecb, Sm4Iv, Sm4Key,
};
pub use smcrypt_algorithms::block::Padding;

// Re-export the API error system instead of custom error types
pub use smcrypt_api::error::{validate, Error, Result};
pub use error::SymmetricResultExt;
