//! Constants for symmetric encryption algorithms

/// SM4 key size in bytes
pub const SM4_KEY_SIZE: usize = 16;

/// SM4 block size in bytes
pub const SM4_BLOCK_SIZE: usize = 16;

/// Number of SM4 rounds (and round keys)
pub const SM4_ROUNDS: usize = 32;
