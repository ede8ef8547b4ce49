// libnfcv/src/tag/operations/read.rs

use log::debug;

use crate::protocol::responses::decode_read_single_block;
use crate::transport::{Connection, Transport};
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Read one block and return its data bytes. A non-success status becomes
/// `BlockReadFailed` carrying the address and ISO 15693 error code.
pub fn read_block_data<T: Transport + ?Sized>(
    conn: &mut Connection<'_, T>,
    address: BlockAddress,
) -> Result<Vec<u8>> {
    let response = conn.read_block(address)?;
    if !response.is_success() {
        return Err(Error::BlockReadFailed {
            address: address.as_u8(),
            status: response.status(),
            code: response.error_code(),
        });
    }
    decode_read_single_block(response.payload())
}

/// Read blocks `start..=end` and concatenate their data. An `end` before
/// `start` reads nothing.
pub fn read_range<T: Transport + ?Sized>(
    conn: &mut Connection<'_, T>,
    start: BlockAddress,
    end: BlockAddress,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for address in start.as_u8()..=end.as_u8() {
        let data = read_block_data(conn, BlockAddress::new(address))?;
        out.extend_from_slice(&data);
    }
    debug!("read {} byte(s) from blocks {}..={}", out.len(), start, end);
    Ok(out)
}

/// Read consecutive blocks from `start` while `keep_going` returns true.
///
/// The predicate sees each block's data, address and index (0-based). The
/// block for which it returns false is still part of the result. Reading
/// also stops after `max_blocks` blocks, or after block `0xFF`.
pub fn read_until<T, F>(
    conn: &mut Connection<'_, T>,
    start: BlockAddress,
    max_blocks: Option<usize>,
    mut keep_going: F,
) -> Result<Vec<(BlockAddress, Vec<u8>)>>
where
    T: Transport + ?Sized,
    F: FnMut(&[u8], BlockAddress, usize) -> bool,
{
    let mut blocks = Vec::new();
    let mut index = 0usize;
    loop {
        if max_blocks.is_some_and(|max| index >= max) {
            break;
        }
        let Ok(address) = start.offset(index) else {
            break;
        };
        let data = read_block_data(conn, address)?;
        let more = keep_going(&data, address, index);
        blocks.push((address, data));
        if !more {
            break;
        }
        index += 1;
    }
    debug!("read_until collected {} block(s) from {}", blocks.len(), start);
    Ok(blocks)
}
