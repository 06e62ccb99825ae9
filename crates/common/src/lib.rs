//! Shared functionality for the smcrypt crates
//!
//! Holds the wrappers used for key material, round keys and other
//! intermediate secrets so that every algorithm crate zeroizes them the
//! same way.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
