// libnfcv/src/protocol/responses/read.rs

use crate::protocol::parser;
use crate::Result;

/// Decode Read Single Block response payload (after the status byte)
/// Layout: block_data(block size)
///
/// The block size is whatever the tag returned; at least one byte is
/// required for a successful read.
pub fn decode_read_single_block(payload: &[u8]) -> Result<Vec<u8>> {
    parser::ensure_len(payload, 1)?;
    Ok(payload.to_vec())
}
