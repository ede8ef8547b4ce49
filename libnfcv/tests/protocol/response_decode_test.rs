#[path = "../common/mod.rs"]
mod common;

use libnfcv::protocol::{Response, ResponseFrame};
use libnfcv::Error;

#[test]
fn read_response_decodes_data() {
    let frame = ResponseFrame::decode(&[0x00, 0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
    match Response::decode(0x20, &frame).unwrap() {
        Response::ReadSingleBlock { data } => assert_eq!(data, vec![0xAA, 0xBB, 0xCC, 0xDD]),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn system_info_response_decodes_fields() {
    let frame = ResponseFrame::decode(&common::fixtures::system_info_response()).unwrap();
    match Response::decode(0x2B, &frame).unwrap() {
        Response::GetSystemInfo(info) => {
            assert_eq!(info.uid.as_bytes(), &common::fixtures::sample_uid_bytes());
            assert_eq!(info.uid.to_hex(), "e007665544332211");
            assert_eq!(info.dsfid, Some(0));
            assert_eq!(info.afi, Some(0));
            assert_eq!(info.block_count, Some(64));
            assert_eq!(info.block_size, Some(4));
            assert_eq!(info.ic_reference, Some(1));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn error_status_is_rejected_before_decoding() {
    let frame = ResponseFrame::decode(&[0x01, 0x10]).unwrap();
    assert!(matches!(
        Response::decode(0x21, &frame),
        Err(Error::TagStatus {
            status: 0x01,
            code: Some(0x10)
        })
    ));
}

#[test]
fn unknown_command_is_unsupported() {
    let frame = ResponseFrame::decode(&[0x00]).unwrap();
    assert!(matches!(
        Response::decode(0x99, &frame),
        Err(Error::UnsupportedOperation(_))
    ));
}
