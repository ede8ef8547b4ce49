// libnfcv/src/protocol/commands/read.rs

use crate::constants::CMD_READ_SINGLE_BLOCK;
use crate::types::{BlockAddress, RequestFlags};

/// Encode Read Single Block request (ISO 15693 command code 0x20)
/// Layout: flags(1) + command_code(1) + block_address(1)
pub fn encode_read_single_block(flags: RequestFlags, address: BlockAddress) -> Vec<u8> {
    vec![flags.as_u8(), CMD_READ_SINGLE_BLOCK, address.as_u8()]
}
