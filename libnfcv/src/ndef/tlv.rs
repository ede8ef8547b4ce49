// libnfcv/src/ndef/tlv.rs

use crate::constants::{
    NDEF_TLV_EXTENDED_LENGTH, NDEF_TLV_HEADER_LEN, NDEF_TLV_MAX_SHORT_LENGTH, NDEF_TLV_TYPE,
};
use crate::protocol::parser;
use crate::{Error, Result};

/// TLV terminator written after the last TLV block on a tag
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Type and one-byte length at the start of the first NDEF block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    pub tlv_type: u8,
    pub length: u8,
}

impl TlvHeader {
    /// Parse the header from a block payload (status byte already removed).
    ///
    /// Only the one-byte length form is supported; a length byte of `0xFF`
    /// announces the three-byte form and is rejected.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let header = parser::slice_at(payload, 0, NDEF_TLV_HEADER_LEN)?;
        let (tlv_type, length) = (header[0], header[1]);
        if length == NDEF_TLV_EXTENDED_LENGTH {
            return Err(Error::UnsupportedOperation(
                "three-byte TLV length form".into(),
            ));
        }
        Ok(Self { tlv_type, length })
    }

    pub fn is_ndef(&self) -> bool {
        self.tlv_type == NDEF_TLV_TYPE
    }

    pub fn encode(&self) -> [u8; 2] {
        [self.tlv_type, self.length]
    }
}

/// Wrap an NDEF message in an NDEF TLV followed by the terminator TLV.
/// Layout: 0x03 + length(1) + message(length) + 0xFE
pub fn wrap_ndef_message(message: &[u8]) -> Result<Vec<u8>> {
    if message.len() > NDEF_TLV_MAX_SHORT_LENGTH {
        return Err(Error::InvalidLength {
            expected: NDEF_TLV_MAX_SHORT_LENGTH,
            actual: message.len(),
        });
    }
    let header = TlvHeader {
        tlv_type: NDEF_TLV_TYPE,
        length: message.len() as u8,
    };
    let mut out = Vec::with_capacity(NDEF_TLV_HEADER_LEN + message.len() + 1);
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(message);
    out.push(TLV_TERMINATOR);
    Ok(out)
}
