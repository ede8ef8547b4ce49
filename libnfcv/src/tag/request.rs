// libnfcv/src/tag/request.rs

//! Typed requests accepted from a host bridge.
//!
//! Addresses arrive as raw bytes so that a multi-byte address can be
//! rejected with `AddressTooLong` at the boundary, before any frame is sent.

use crate::types::BlockAddress;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadBlockRequest {
    pub address: Vec<u8>,
}

impl ReadBlockRequest {
    pub fn validate(&self) -> Result<BlockAddress> {
        BlockAddress::try_from(&self.address[..])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteBlockRequest {
    pub address: Vec<u8>,
    pub data: Vec<u8>,
}

impl WriteBlockRequest {
    pub fn validate(&self) -> Result<BlockAddress> {
        BlockAddress::try_from(&self.address[..])
    }
}

/// Raw frame passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransceiveRequest {
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "action", rename_all = "camelCase"))]
pub enum Request {
    ReadBlock(ReadBlockRequest),
    WriteBlock(WriteBlockRequest),
    Transceive(TransceiveRequest),
    ReadNdef,
}
