use libnfcv::tag::{ReadBlockRequest, Request, TransceiveRequest, WriteBlockRequest};
use libnfcv::test_support::mock_tag;
use libnfcv::Error;

#[test]
fn multi_byte_address_rejected_at_boundary() {
    let mut tag = mock_tag(vec![]);
    let req = Request::WriteBlock(WriteBlockRequest {
        address: vec![0x00, 0x05],
        data: vec![0; 4],
    });
    assert!(matches!(
        tag.handle(req),
        Err(Error::AddressTooLong { actual: 2 })
    ));
    assert_eq!(tag.transport().connects, 0);
}

#[test]
fn requests_map_to_frames() {
    let mut tag = mock_tag(vec![vec![0x00, 9, 9, 9, 9], vec![0x00], vec![0x00, 0x01]]);
    tag.handle(Request::ReadBlock(ReadBlockRequest { address: vec![1] }))
        .unwrap();
    tag.handle(Request::WriteBlock(WriteBlockRequest {
        address: vec![1],
        data: vec![1, 2, 3, 4],
    }))
    .unwrap();
    tag.handle(Request::Transceive(TransceiveRequest {
        data: vec![0x22, 0x2B],
    }))
    .unwrap();

    let sent = &tag.transport().sent;
    assert_eq!(sent[0], vec![0x02, 0x20, 0x01]);
    assert_eq!(sent[1], vec![0x02, 0x21, 0x01, 1, 2, 3, 4]);
    assert_eq!(sent[2], vec![0x22, 0x2B]);
}

#[test]
fn read_ndef_request_returns_payload() {
    let mut tag = mock_tag(vec![vec![0x00, 0x03, 0x02, 0xAB, 0xCD]]);
    assert_eq!(tag.handle(Request::ReadNdef).unwrap(), vec![0xAB, 0xCD]);
}
