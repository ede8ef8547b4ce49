// libnfcv/src/ndef/outcome.rs

use crate::types::BlockAddress;
use crate::{Error, Result};

/// Result of an NDEF read.
///
/// `NoNdefContent` and `ReassemblyFailed` are kept apart here;
/// `into_bytes` flattens both into the empty result bridges expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdefOutcome {
    /// The complete NDEF message
    Payload(Vec<u8>),
    /// The first block could not be read or holds no NDEF TLV
    NoNdefContent,
    /// A continuation block reported a non-success status
    ReassemblyFailed {
        address: BlockAddress,
        status: u8,
        code: Option<u8>,
    },
}

impl NdefOutcome {
    pub fn is_payload(&self) -> bool {
        matches!(self, Self::Payload(_))
    }

    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Payload(p) => Some(p),
            _ => None,
        }
    }

    /// Payload bytes, or an empty vector for both sentinel outcomes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Payload(p) => p,
            Self::NoNdefContent | Self::ReassemblyFailed { .. } => Vec::new(),
        }
    }

    /// Strict form: a failed continuation read becomes `BlockReadFailed`,
    /// a tag without NDEF content yields `None`.
    pub fn into_result(self) -> Result<Option<Vec<u8>>> {
        match self {
            Self::Payload(p) => Ok(Some(p)),
            Self::NoNdefContent => Ok(None),
            Self::ReassemblyFailed {
                address,
                status,
                code,
            } => Err(Error::BlockReadFailed {
                address: address.as_u8(),
                status,
                code,
            }),
        }
    }
}
