//! Endianness utility functions

/// Convert a u32 from big-endian byte order to native byte order
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Load big-endian words from `bytes` into `words`.
///
/// `bytes` must hold at least `4 * words.len()` bytes.
pub fn load_be_words(bytes: &[u8], words: &mut [u32]) {
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32_from_be_bytes(chunk);
    }
}

/// Store `words` into `out` in big-endian order.
///
/// `out` must hold at least `4 * words.len()` bytes.
pub fn store_be_words(words: &[u32], out: &mut [u8]) {
    for (w, chunk) in words.iter().zip(out.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&w.to_be_bytes());
    }
}
