//! Error handling for the smcrypt crates

pub mod types;
pub mod validate;

pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}
