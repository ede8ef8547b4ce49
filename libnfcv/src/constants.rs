// libnfcv/src/constants.rs
//! Common protocol constants used across the crate

/// Request flags sent with every command: single subcarrier, high data rate.
pub const NFCV_REQUEST_FLAGS: u8 = 0x02;

/// ISO 15693 Read Single Block command code
pub const CMD_READ_SINGLE_BLOCK: u8 = 0x20;

/// ISO 15693 Write Single Block command code
pub const CMD_WRITE_SINGLE_BLOCK: u8 = 0x21;

/// ISO 15693 Get System Information command code
pub const CMD_GET_SYSTEM_INFO: u8 = 0x2B;

/// Response status byte reported by the tag on success
pub const STATUS_OK: u8 = 0x00;

/// Status bit set by the tag when the response carries an error code
pub const STATUS_ERROR_FLAG: u8 = 0x01;

/// Address of the first block holding the TLV-encoded NDEF message
pub const NDEF_BLOCK_ADDR: u8 = 1;

/// TLV type tag of an NDEF message
pub const NDEF_TLV_TYPE: u8 = 0x03;

/// Size of the one-byte-length TLV header: type(1) + length(1)
pub const NDEF_TLV_HEADER_LEN: usize = 2;

/// Length byte announcing the three-byte TLV length form
pub const NDEF_TLV_EXTENDED_LENGTH: u8 = 0xFF;

/// Largest payload length expressible with the one-byte TLV length form
pub const NDEF_TLV_MAX_SHORT_LENGTH: usize = 254;

/// Get System Information: UID length in bytes
pub const NFCV_UID_LEN: usize = 8;
