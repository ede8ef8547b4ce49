// libnfcv/src/protocol/codec.rs

use crate::Result;
use crate::types::BlockAddress;

use super::commands::Command;
use super::frame::{CommandFrame, ResponseFrame};

/// Encode a typed Command into a request frame.
pub fn encode_command_frame(cmd: &Command) -> CommandFrame {
    CommandFrame::from_vec(cmd.encode())
}

/// Build a Read Single Block frame from a caller-supplied address.
/// Fails with `AddressTooLong` for more than one address byte.
pub fn build_read_frame(address: &[u8]) -> Result<CommandFrame> {
    let address = BlockAddress::try_from(address)?;
    Ok(encode_command_frame(&Command::ReadSingleBlock { address }))
}

/// Build a Write Single Block frame from a caller-supplied address and data.
/// Fails with `AddressTooLong` for more than one address byte.
pub fn build_write_frame(address: &[u8], data: &[u8]) -> Result<CommandFrame> {
    let address = BlockAddress::try_from(address)?;
    Ok(encode_command_frame(&Command::WriteSingleBlock {
        address,
        data: data.to_vec(),
    }))
}

/// Wrap caller-supplied raw bytes unchanged.
pub fn build_raw_frame(bytes: &[u8]) -> CommandFrame {
    CommandFrame::from_vec(bytes.to_vec())
}

/// Split raw response bytes into status and payload.
pub fn decode_response(bytes: &[u8]) -> Result<ResponseFrame> {
    let frame = ResponseFrame::decode(bytes)?;
    #[cfg(feature = "diagnostics")]
    log::trace!(
        "decoded response: status={:#04x} payload=[{}]",
        frame.status(),
        crate::utils::bytes_to_hex_spaced(frame.payload())
    );
    Ok(frame)
}
