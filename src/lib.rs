//! # smcrypt
//!
//! SM2, SM3 and SM4 in pure Rust.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! smcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): SM3, SM4 block cipher and modes, SM2 curve arithmetic
//! - `symmetric` (default): keyed SM4-ECB/SM4-CBC and hex helpers
//! - `pke` (default): SM2 public key encryption and hex helpers
//! - `serde`: serialization of hex key pairs
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`smcrypt-algorithms`]: Core primitives (SM3, SM4, SM2 curve, SM3 KDF)
//! - [`smcrypt-symmetric`]: SM4 encryption
//! - [`smcrypt-pke`]: SM2 public key encryption

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use smcrypt_api as api;
pub use smcrypt_common as common;
pub use smcrypt_internal as internal;
pub use smcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use smcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use smcrypt_symmetric as symmetric;

#[cfg(feature = "pke")]
pub use smcrypt_pke as pke;

/// Common imports for smcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Serialize, SerializeSecret, SymmetricCipher};

    // Re-export security types
    pub use crate::api::SecretBytes;
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{BlockCipher, HashFunction, Padding, Sm3, Sm4};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{IvCipher, Sm4Cbc, Sm4Ecb, Sm4Iv, Sm4Key};

    #[cfg(feature = "pke")]
    pub use crate::pke::{Mode, Sm2, Sm2PublicKey, Sm2SecretKey};
}
