//! PKCS#7 block padding

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};

/// Padding applied by the block modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// No padding; input must already be a whole number of blocks
    None,
    /// PKCS#7: append `k` copies of byte `k`, `1 <= k <= block_size`
    #[default]
    Pkcs7,
}

/// Append PKCS#7 padding. A full block is added when `data` is aligned.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Strip and verify PKCS#7 padding
///
/// The last byte must lie in `1..=block_size` and every padding byte must
/// equal it. Input must be a non-empty multiple of the block size.
pub fn pkcs7_unpad(data: &[u8], block_size: usize, context: &'static str) -> Result<Vec<u8>> {
    validate::block_multiple(context, data.len(), block_size)?;
    let last = match data.last() {
        Some(&b) => b as usize,
        None => return Err(Error::Padding { context }),
    };
    if last == 0 || last > block_size {
        return Err(Error::Padding { context });
    }

    let body = data.len() - last;
    let mut diff = 0u8;
    for &b in &data[body..] {
        diff |= b ^ last as u8;
    }
    if diff != 0 {
        return Err(Error::Padding { context });
    }
    Ok(data[..body].to_vec())
}
