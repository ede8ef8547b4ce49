// fixtures.rs: tag memory images and responses shared across tests

use libnfcv::test_support::block_response;

pub const BLOCK_SIZE: usize = 4;

/// First NDEF block: TLV type, length 5, first three payload bytes.
pub fn two_block_first() -> Vec<u8> {
    vec![0x00, 0x03, 0x05, 0x01, 0x02, 0x03]
}

/// Second NDEF block: the last two payload bytes.
pub fn two_block_second() -> Vec<u8> {
    vec![0x00, 0x04, 0x05]
}

pub fn two_block_payload() -> Vec<u8> {
    vec![0x01, 0x02, 0x03, 0x04, 0x05]
}

/// Block 1 holding something other than an NDEF TLV.
pub fn non_ndef_block() -> Vec<u8> {
    block_response(&[0x04, 0x05, 0x00, 0x00])
}

/// Block 1 declaring a 10 byte payload of which two bytes are present.
pub fn long_tlv_first_block() -> Vec<u8> {
    block_response(&[0x03, 0x0A, 0x01, 0x02])
}

/// Tag memory (from block 1) holding a Text record wrapped in its TLV.
pub fn text_record_memory(text: &str) -> Vec<u8> {
    let msg = libnfcv::ndef::encode_text_record("en", text).expect("text record");
    libnfcv::ndef::wrap_ndef_message(&msg).expect("tlv")
}

/// Get System Info response for an 8-byte UID, 64 blocks of 4 bytes.
pub fn system_info_response() -> Vec<u8> {
    let mut r = vec![0x00, 0x0F];
    r.extend_from_slice(&sample_uid_bytes());
    r.extend_from_slice(&[0x00, 0x00, 0x3F, 0x03, 0x01]);
    r
}

pub fn sample_uid_bytes() -> [u8; 8] {
    [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x07, 0xE0]
}
