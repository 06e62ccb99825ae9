//! Constants for hash functions

/// Output size of SM3 in bytes
pub const SM3_OUTPUT_SIZE: usize = 32;

/// Internal block size of SM3 in bytes
pub const SM3_BLOCK_SIZE: usize = 64;

/// SM3 initial chaining value
pub const SM3_IV: [u32; 8] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];
