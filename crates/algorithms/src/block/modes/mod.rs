//! Block cipher modes of operation
//!
//! ECB and CBC, both with optional PKCS#7 padding.

pub mod cbc;
pub mod ecb;

pub use cbc::Cbc;
pub use ecb::Ecb;
