use libnfcv::protocol::{ResponseFrame, codec};
use libnfcv::Error;

#[test]
fn decode_response_splits_status() {
    let r = codec::decode_response(&[0x00, 0x03, 0x05, 0x01]).unwrap();
    assert!(r.is_success());
    assert_eq!(r.payload(), &[0x03, 0x05, 0x01]);
}

#[test]
fn decode_response_empty_is_error() {
    assert!(matches!(codec::decode_response(&[]), Err(Error::EmptyResponse)));
}

#[test]
fn error_status_carries_code() {
    let r = ResponseFrame::decode(&[0x01, 0x0F]).unwrap();
    assert_eq!(r.error_code(), Some(0x0F));
    let err = r.check().unwrap_err();
    assert_eq!(err.to_string(), "tag error: status=0x01, code=Some(15)");
}

#[test]
fn hex_rendering_of_frames() {
    let frame = codec::build_read_frame(&[0x1A]).unwrap();
    assert_eq!(
        libnfcv::utils::bytes_to_hex_spaced(frame.as_bytes()),
        "02 20 1a"
    );
    assert_eq!(hex::encode(frame.as_bytes()), "02201a");
}
