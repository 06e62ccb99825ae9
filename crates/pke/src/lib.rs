//! SM2 public key encryption for the smcrypt library.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub mod sm2;

// Re-export key items
pub use error::{Error, Result};
pub use sm2::{Mode, Sm2, Sm2KeyPairHex, Sm2PublicKey, Sm2SecretKey};
