// libnfcv/src/tag/operations/mod.rs

//! Multi-step operations that run inside one open `Connection`.

pub mod ndef;
pub mod read;
pub mod write;

pub use ndef::read_ndef;
pub use read::{read_block_data, read_range, read_until};
pub use write::{write_block_checked, write_blocks};
