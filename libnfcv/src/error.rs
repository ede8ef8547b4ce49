// libnfcv/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("block address too long: expected 1 byte, got {actual}")]
    AddressTooLong { actual: usize },

    #[error("block address out of range: {base:#04x} + {offset}")]
    AddressOutOfRange { base: u8, offset: usize },

    #[error("empty response from tag")]
    EmptyResponse,

    #[error("no tag available")]
    TagUnavailable,

    #[error("tag was lost")]
    TagLost,

    #[error("read of block {address:#04x} failed: status={status:#04x}, code={code:?}")]
    BlockReadFailed {
        address: u8,
        status: u8,
        code: Option<u8>,
    },

    #[error("write of block {address:#04x} failed: status={status:#04x}, code={code:?}")]
    BlockWriteFailed {
        address: u8,
        status: u8,
        code: Option<u8>,
    },

    #[error("tag error: status={status:#04x}, code={code:?}")]
    TagStatus { status: u8, code: Option<u8> },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected response: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("ndef format error: {0}")]
    NdefFormat(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("transport error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;
