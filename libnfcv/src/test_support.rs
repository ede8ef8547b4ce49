// libnfcv/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build the raw responses a tag in the field would return so
//! tests across the crate and the tests/ directory share the same fixtures.
#![allow(dead_code)]

use crate::constants::{STATUS_ERROR_FLAG, STATUS_OK};
use crate::tag::Tag;
use crate::transport::mock::MockTransport;

/// Successful Read Single Block response carrying `data`.
#[doc(hidden)]
pub fn block_response(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + data.len());
    out.push(STATUS_OK);
    out.extend_from_slice(data);
    out
}

/// Error response with the given ISO 15693 error code.
#[doc(hidden)]
pub fn error_response(code: u8) -> Vec<u8> {
    vec![STATUS_ERROR_FLAG, code]
}

/// Split tag memory into successful block responses of `block_size` bytes.
/// The last block is zero padded.
#[doc(hidden)]
pub fn ndef_block_responses(memory: &[u8], block_size: usize) -> Vec<Vec<u8>> {
    memory
        .chunks(block_size.max(1))
        .map(|chunk| {
            let mut block = chunk.to_vec();
            block.resize(block_size.max(1), 0x00);
            block_response(&block)
        })
        .collect()
}

/// Convenience: a Tag with default configuration over a MockTransport
/// pre-seeded with the provided responses.
#[doc(hidden)]
pub fn mock_tag(responses: Vec<Vec<u8>>) -> Tag<MockTransport> {
    Tag::new(MockTransport::with_responses(responses))
}
