// libnfcv/src/protocol/commands/write.rs

use crate::constants::CMD_WRITE_SINGLE_BLOCK;
use crate::types::{BlockAddress, RequestFlags};

/// Encode Write Single Block request (ISO 15693 command code 0x21)
/// Layout: flags(1) + command_code(1) + block_address(1) + data(N)
///
/// The block size is tag specific, so `data` is sent as given.
pub fn encode_write_single_block(
    flags: RequestFlags,
    address: BlockAddress,
    data: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + data.len());
    buf.push(flags.as_u8());
    buf.push(CMD_WRITE_SINGLE_BLOCK);
    buf.push(address.as_u8());
    buf.extend_from_slice(data);
    buf
}
