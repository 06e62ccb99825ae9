//! Public API traits and types for the smcrypt library
//!
//! The error type, the trait surface shared by the algorithm crates and a
//! handful of secret-carrying byte types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::SecretBytes;

pub use traits::{Pke, Serialize, SerializeSecret, SymmetricCipher};

pub use traits::{pke, serialize, symmetric};
