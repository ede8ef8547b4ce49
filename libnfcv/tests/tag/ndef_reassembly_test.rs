#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libnfcv::ndef::NdefOutcome;
use libnfcv::tag::{Tag, TagConfig};
use libnfcv::test_support::{error_response, ndef_block_responses};
use libnfcv::types::BlockAddress;

#[test]
fn payload_spanning_two_blocks() {
    common::init_logging();
    let mut m = common::mock_with(vec![fixtures::two_block_first(), fixtures::two_block_second()]);
    let mut tag = Tag::new(&mut m);
    assert_eq!(tag.read_ndef_payload().unwrap(), fixtures::two_block_payload());
    assert_eq!(m.sent, vec![vec![0x02, 0x20, 0x01], vec![0x02, 0x20, 0x02]]);
    // One connection for the whole reassembly.
    assert_eq!((m.connects, m.closes), (1, 1));
}

#[test]
fn non_ndef_first_block() {
    let mut m = common::mock_with(vec![fixtures::non_ndef_block()]);
    let mut tag = Tag::new(&mut m);
    assert_eq!(tag.read_ndef().unwrap(), NdefOutcome::NoNdefContent);
    assert_eq!(m.sent, vec![vec![0x02, 0x20, 0x01]]);
}

#[test]
fn non_ndef_payload_is_empty() {
    let mut m = common::mock_with(vec![fixtures::non_ndef_block()]);
    let mut tag = Tag::new(&mut m);
    assert!(tag.read_ndef_payload().unwrap().is_empty());
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn failed_continuation_stops_reading() {
    let mut m = common::mock_with(vec![
        fixtures::long_tlv_first_block(),
        error_response(0x10),
        fixtures::two_block_second(),
    ]);
    let mut tag = Tag::new(&mut m);
    assert_eq!(
        tag.read_ndef().unwrap(),
        NdefOutcome::ReassemblyFailed {
            address: BlockAddress::new(2),
            status: 0x01,
            code: Some(0x10),
        }
    );
    assert_eq!(m.sent.len(), 2);
    assert_eq!(m.responses.len(), 1);
}

#[test]
fn failed_continuation_flattens_to_empty_payload() {
    let mut m = common::mock_with(vec![fixtures::long_tlv_first_block(), error_response(0x10)]);
    let mut tag = Tag::new(&mut m);
    assert!(tag.read_ndef_payload().unwrap().is_empty());
}

#[test]
fn text_record_over_many_blocks() {
    let memory = fixtures::text_record_memory("a fairly long label for a pump");
    let blocks = ndef_block_responses(&memory, fixtures::BLOCK_SIZE);
    let block_count = blocks.len();
    let mut m = common::mock_with(blocks);
    let mut tag = Tag::new(&mut m);
    let msg = tag.read_ndef_message().unwrap().unwrap();
    assert_eq!(
        msg.first_text().unwrap().text,
        "a fairly long label for a pump"
    );
    // The trailing terminator block is never requested when the payload
    // ends before it.
    assert!(m.sent.len() <= block_count);
}

#[test]
fn configured_start_block() {
    let mut m = common::mock_with(vec![vec![0x00, 0x03, 0x01, 0x7F, 0xFE]]);
    let config = TagConfig::new().ndef_block_address(BlockAddress::new(4));
    let mut tag = Tag::with_config(&mut m, config);
    assert_eq!(tag.read_ndef_payload().unwrap(), vec![0x7F]);
    assert_eq!(m.sent, vec![vec![0x02, 0x20, 0x04]]);
}

#[test]
fn extended_length_tlv_is_rejected() {
    let mut m = common::mock_with(vec![vec![0x00, 0x03, 0xFF, 0x01, 0x00]]);
    let mut tag = Tag::new(&mut m);
    assert!(matches!(
        tag.read_ndef(),
        Err(libnfcv::Error::UnsupportedOperation(_))
    ));
    assert_eq!(m.closes, 1);
}
