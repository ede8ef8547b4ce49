// libnfcv/src/protocol/responses/write.rs

use crate::Result;

/// Decode Write Single Block response payload (after the status byte).
/// A successful write carries no payload; trailing bytes some tags append
/// are ignored.
pub fn decode_write_single_block(payload: &[u8]) -> Result<()> {
    if !payload.is_empty() {
        log::trace!("ignoring {} trailing byte(s) in write response", payload.len());
    }
    Ok(())
}
