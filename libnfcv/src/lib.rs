// libnfcv/src/lib.rs

//! libnfcv
//!
//! Pure Rust NFC-V (ISO 15693) block access and NDEF reassembly on top of
//! a pluggable tag transport.

pub mod constants;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
