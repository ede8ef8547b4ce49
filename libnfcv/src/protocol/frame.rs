// libnfcv/src/protocol/frame.rs

use crate::constants::{STATUS_ERROR_FLAG, STATUS_OK};
use crate::{Error, Result};

/// Outgoing NFC-V request.
/// Format: [Flags(1)] [Command(1)] [Address(1)] [Data(n)]
///
/// Built fresh per operation and consumed by a single transceive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame(Vec<u8>);

impl CommandFrame {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Tag reply split into its status byte and the remaining payload.
/// Format: [Status(1)] [Payload(n)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    status: u8,
    payload: Vec<u8>,
}

impl ResponseFrame {
    /// Decode raw response bytes. Byte 0 is the status, the rest is payload
    /// and is kept untouched.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        match bytes.split_first() {
            Some((&status, payload)) => Ok(Self {
                status,
                payload: payload.to_vec(),
            }),
            None => Err(Error::EmptyResponse),
        }
    }

    pub fn new(status: u8, payload: Vec<u8>) -> Self {
        Self { status, payload }
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// ISO 15693 error code carried after the status byte of an error
    /// response.
    pub fn error_code(&self) -> Option<u8> {
        if self.status & STATUS_ERROR_FLAG != 0 {
            self.payload.first().copied()
        } else {
            None
        }
    }

    /// Turn a non-success status into `Error::TagStatus`.
    pub fn check(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::TagStatus {
                status: self.status,
                code: self.error_code(),
            })
        }
    }

    /// Re-encode as raw bytes: status followed by payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.payload.len());
        out.push(self.status);
        out.extend_from_slice(&self.payload);
        out
    }
}
