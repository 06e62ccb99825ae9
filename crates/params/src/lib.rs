//! Constant values for smcrypt cryptographic operations
//!
//! Curve domain parameters and algorithm sizes. Everything here is
//! `const` data and safe to share between threads.

#![no_std]

pub mod traditional;
pub mod utils;
