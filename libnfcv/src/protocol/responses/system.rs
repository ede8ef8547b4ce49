// libnfcv/src/protocol/responses/system.rs

use crate::constants::NFCV_UID_LEN;
use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

const INFO_DSFID: u8 = 0x01;
const INFO_AFI: u8 = 0x02;
const INFO_MEMORY_SIZE: u8 = 0x04;
const INFO_IC_REFERENCE: u8 = 0x08;

/// Tag information returned by Get System Information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInfo {
    pub uid: Uid,
    pub dsfid: Option<u8>,
    pub afi: Option<u8>,
    /// Number of blocks on the tag
    pub block_count: Option<u16>,
    /// Block size in bytes
    pub block_size: Option<u8>,
    pub ic_reference: Option<u8>,
}

/// Decode Get System Information response payload (after the status byte)
/// Layout: info_flags(1) + uid(8) + [dsfid(1)] + [afi(1)]
///         + [block_count-1(1) + block_size-1(1)] + [ic_reference(1)]
pub fn decode_get_system_info(payload: &[u8]) -> Result<SystemInfo> {
    const MIN_LEN: usize = 1 + NFCV_UID_LEN; // 9
    parser::ensure_len(payload, MIN_LEN)?;

    let flags = parser::byte_at(payload, 0)?;
    let uid = parser::uid_at(payload, 1)?;
    let mut idx = MIN_LEN;

    let mut optional = |present: bool| -> Result<Option<u8>> {
        if !present {
            return Ok(None);
        }
        let b = parser::byte_at(payload, idx)?;
        idx += 1;
        Ok(Some(b))
    };

    let dsfid = optional(flags & INFO_DSFID != 0)?;
    let afi = optional(flags & INFO_AFI != 0)?;
    let has_memory = flags & INFO_MEMORY_SIZE != 0;
    let blocks = optional(has_memory)?;
    let size = optional(has_memory)?;
    let ic_reference = optional(flags & INFO_IC_REFERENCE != 0)?;

    Ok(SystemInfo {
        uid,
        dsfid,
        afi,
        block_count: blocks.map(|b| b as u16 + 1),
        block_size: size.map(|s| (s & 0x1F) + 1),
        ic_reference,
    })
}
