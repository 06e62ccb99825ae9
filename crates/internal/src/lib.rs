//! Internal utilities for the smcrypt library
//!
//! Helpers shared by the algorithm crates. Nothing here is part of the
//! stable public surface.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
