// libnfcv/src/tag/operations/write.rs

use log::debug;

use crate::protocol::{Command, codec, responses::decode_write_single_block};
use crate::transport::{Connection, Transport};
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Write one block and check the tag's status.
///
/// An empty reply counts as success: readers that report a spurious
/// `TagLost` after a completed write leave nothing else to check.
pub fn write_block_checked<T: Transport + ?Sized>(
    conn: &mut Connection<'_, T>,
    address: BlockAddress,
    data: &[u8],
) -> Result<()> {
    let frame = codec::encode_command_frame(&Command::WriteSingleBlock {
        address,
        data: data.to_vec(),
    });
    let raw = conn.transceive(&frame)?;
    if raw.is_empty() {
        debug!("write to block {} returned no status; assuming success", address);
        return Ok(());
    }

    let response = codec::decode_response(&raw)?;
    if !response.is_success() {
        return Err(Error::BlockWriteFailed {
            address: address.as_u8(),
            status: response.status(),
            code: response.error_code(),
        });
    }
    decode_write_single_block(response.payload())
}

/// Write several blocks in order, stopping at the first failure.
pub fn write_blocks<T, D>(conn: &mut Connection<'_, T>, blocks: &[(BlockAddress, D)]) -> Result<()>
where
    T: Transport + ?Sized,
    D: AsRef<[u8]>,
{
    for (address, data) in blocks {
        write_block_checked(conn, *address, data.as_ref())?;
    }
    debug!("wrote {} block(s)", blocks.len());
    Ok(())
}
