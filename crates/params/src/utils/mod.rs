//! Size constants for hashes and block ciphers

pub mod hash;
pub mod symmetric;
