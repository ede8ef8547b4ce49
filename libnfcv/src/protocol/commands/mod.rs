// libnfcv/src/protocol/commands/mod.rs

pub mod read;
pub mod system;
pub mod write;

pub use read::encode_read_single_block;
pub use system::encode_get_system_info;
pub use write::encode_write_single_block;

use crate::constants::{CMD_GET_SYSTEM_INFO, CMD_READ_SINGLE_BLOCK, CMD_WRITE_SINGLE_BLOCK};
use crate::types::{BlockAddress, RequestFlags};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ReadSingleBlock {
        address: BlockAddress,
    },
    WriteSingleBlock {
        address: BlockAddress,
        data: Vec<u8>,
    },
    GetSystemInfo,
}

impl Command {
    /// Return the command code as defined by ISO 15693.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::ReadSingleBlock { .. } => CMD_READ_SINGLE_BLOCK,
            Self::WriteSingleBlock { .. } => CMD_WRITE_SINGLE_BLOCK,
            Self::GetSystemInfo => CMD_GET_SYSTEM_INFO,
        }
    }

    /// Block addressed by the command, if any.
    pub fn address(&self) -> Option<BlockAddress> {
        match self {
            Self::ReadSingleBlock { address } | Self::WriteSingleBlock { address, .. } => {
                Some(*address)
            }
            Self::GetSystemInfo => None,
        }
    }

    /// Encode the command into the raw request (flags + command code + params).
    pub fn encode(&self) -> Vec<u8> {
        let flags = RequestFlags::HIGH_DATA_RATE;
        match self {
            Self::ReadSingleBlock { address } => encode_read_single_block(flags, *address),
            Self::WriteSingleBlock { address, data } => {
                encode_write_single_block(flags, *address, data)
            }
            Self::GetSystemInfo => encode_get_system_info(flags),
        }
    }
}
