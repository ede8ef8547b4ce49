// libnfcv/src/protocol/responses/mod.rs

pub mod read;
pub mod system;
pub mod write;

pub use read::decode_read_single_block;
pub use system::{SystemInfo, decode_get_system_info};
pub use write::decode_write_single_block;

use crate::constants::{CMD_GET_SYSTEM_INFO, CMD_READ_SINGLE_BLOCK, CMD_WRITE_SINGLE_BLOCK};
use crate::protocol::frame::ResponseFrame;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    ReadSingleBlock { data: Vec<u8> },
    WriteSingleBlock,
    GetSystemInfo(SystemInfo),
}

impl Response {
    /// Decode a response frame for the given command code.
    pub fn decode(command_code: u8, frame: &ResponseFrame) -> crate::Result<Self> {
        // Central status check so decoders only ever see successful payloads.
        if !frame.is_success() {
            return Err(crate::Error::TagStatus {
                status: frame.status(),
                code: frame.error_code(),
            });
        }

        let payload = frame.payload();
        match command_code {
            CMD_READ_SINGLE_BLOCK => Ok(Self::ReadSingleBlock {
                data: read::decode_read_single_block(payload)?,
            }),
            CMD_WRITE_SINGLE_BLOCK => {
                write::decode_write_single_block(payload)?;
                Ok(Self::WriteSingleBlock)
            }
            CMD_GET_SYSTEM_INFO => Ok(Self::GetSystemInfo(system::decode_get_system_info(
                payload,
            )?)),
            other => Err(crate::Error::UnsupportedOperation(format!(
                "no decoder for command {:#04x}",
                other
            ))),
        }
    }

    /// Command code this response answers.
    pub fn command_code(&self) -> u8 {
        match self {
            Response::ReadSingleBlock { .. } => CMD_READ_SINGLE_BLOCK,
            Response::WriteSingleBlock => CMD_WRITE_SINGLE_BLOCK,
            Response::GetSystemInfo(_) => CMD_GET_SYSTEM_INFO,
        }
    }
}
