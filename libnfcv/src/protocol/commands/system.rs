// libnfcv/src/protocol/commands/system.rs

use crate::constants::CMD_GET_SYSTEM_INFO;
use crate::types::RequestFlags;

/// Encode Get System Information request (ISO 15693 command code 0x2B)
/// Layout: flags(1) + command_code(1)
pub fn encode_get_system_info(flags: RequestFlags) -> Vec<u8> {
    vec![flags.as_u8(), CMD_GET_SYSTEM_INFO]
}
