#[path = "../common/mod.rs"]
mod common;

use libnfcv::tag::{Tag, TagBuilder};
use libnfcv::test_support::{block_response, error_response, mock_tag};
use libnfcv::transport::mock::MockTransport;
use libnfcv::types::BlockAddress;
use libnfcv::Error;

#[test]
fn repeated_reads_are_identical() {
    let resp = block_response(&[0xCA, 0xFE, 0xBA, 0xBE]);
    let mut tag = mock_tag(vec![resp.clone(), resp.clone()]);
    let first = tag.read_block(&[0x07]).unwrap();
    let second = tag.read_block(&[0x07]).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, resp);

    let m = tag.into_inner();
    assert_eq!(m.sent[0], m.sent[1]);
    assert_eq!((m.connects, m.closes), (2, 2));
}

#[test]
fn error_status_is_returned_raw() {
    let mut tag = mock_tag(vec![error_response(0x10)]);
    assert_eq!(tag.read_block(&[0x40]).unwrap(), vec![0x01, 0x10]);
}

#[test]
fn read_block_data_reports_failure() {
    let mut tag = mock_tag(vec![error_response(0x10)]);
    assert!(matches!(
        tag.read_block_data(BlockAddress::new(0x40)),
        Err(Error::BlockReadFailed {
            address: 0x40,
            status: 0x01,
            code: Some(0x10)
        })
    ));
}

#[test]
fn write_then_read_back() {
    let mut tag = mock_tag(vec![vec![0x00], block_response(&[1, 2, 3, 4])]);
    tag.write_block_checked(BlockAddress::new(2), &[1, 2, 3, 4])
        .unwrap();
    assert_eq!(
        tag.read_block_data(BlockAddress::new(2)).unwrap(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn write_error_status() {
    let mut tag = mock_tag(vec![error_response(0x12)]);
    assert!(matches!(
        tag.write_block_checked(BlockAddress::new(2), &[0; 4]),
        Err(Error::BlockWriteFailed {
            address: 2,
            code: Some(0x12),
            ..
        })
    ));
}

#[test]
fn range_and_until_share_one_connection() {
    let mut m = common::mock_with(vec![
        block_response(&[1, 1, 1, 1]),
        block_response(&[2, 2, 2, 2]),
        block_response(&[3, 3, 3, 3]),
        block_response(&[0xFE, 0, 0, 0]),
    ]);
    let mut tag = Tag::new(&mut m);
    assert_eq!(
        tag.read_range(BlockAddress::new(0), BlockAddress::new(1))
            .unwrap(),
        vec![1, 1, 1, 1, 2, 2, 2, 2]
    );
    let blocks = tag
        .read_until(BlockAddress::new(2), Some(8), |data, _, _| data[0] != 0xFE)
        .unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].0, BlockAddress::new(3));
    assert_eq!((m.connects, m.closes), (2, 2));
}

#[test]
fn write_blocks_in_order() {
    let mut m = common::mock_with(vec![vec![0x00], vec![0x00]]);
    let mut tag = Tag::new(&mut m);
    tag.write_blocks(&[
        (BlockAddress::new(5), vec![0xAA; 4]),
        (BlockAddress::new(6), vec![0xBB; 4]),
    ])
    .unwrap();
    assert_eq!(m.sent[0][..3], [0x02, 0x21, 0x05]);
    assert_eq!(m.sent[1][..3], [0x02, 0x21, 0x06]);
}

#[test]
fn absent_tag_is_unavailable_and_released() {
    let mut m = MockTransport::new();
    m.set_present(false);
    let mut tag = TagBuilder::new().with_transport(&mut m).build().unwrap();
    assert!(matches!(tag.read_block(&[0x01]), Err(Error::TagUnavailable)));
    assert_eq!(m.closes, 1);
    assert!(m.sent.is_empty());
}

#[test]
fn system_info_through_session() {
    let mut tag = mock_tag(vec![common::fixtures::system_info_response()]);
    let info = tag.system_info().unwrap();
    assert_eq!(info.uid.as_bytes(), &common::fixtures::sample_uid_bytes());
}
