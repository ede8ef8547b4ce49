//! Utilities for libnfcv: small helpers used across the crate.
//!
//! Hex rendering is used by the logging of frames and by `Uid::to_hex`.

pub mod hex;

pub use hex::*;
