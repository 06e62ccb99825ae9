//! Hash function implementations

use crate::error::Result;
use alloc::string::String;

pub mod sm3;

pub use sm3::{Sm3, Sm3Algorithm};

/// Compile-time description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Compression block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for cryptographic hash functions
pub trait HashFunction: Sized {
    /// Marker type describing the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and returns the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> String;
}
