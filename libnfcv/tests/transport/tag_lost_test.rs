use libnfcv::tag::Tag;
use libnfcv::transport::mock::MockTransport;
use libnfcv::Error;

fn lost() -> MockTransport {
    let mut m = MockTransport::new();
    m.push_error(Error::TagLost);
    m
}

#[test]
fn read_block_yields_empty_response() {
    let mut m = lost();
    let mut tag = Tag::new(&mut m);
    assert!(tag.read_block(&[0x01]).unwrap().is_empty());
    assert_eq!(m.closes, 1);
}

#[test]
fn write_block_yields_empty_response() {
    let mut m = lost();
    let mut tag = Tag::new(&mut m);
    assert!(tag.write_block(&[0x01], &[0; 4]).unwrap().is_empty());
}

#[test]
fn raw_transceive_yields_empty_response() {
    let mut m = lost();
    let mut tag = Tag::new(&mut m);
    assert!(tag.transceive(&[0x02, 0x2B]).unwrap().is_empty());
}

#[test]
fn other_transport_errors_propagate() {
    let mut m = MockTransport::new();
    m.push_error(Error::Io("reader unplugged".into()));
    let mut tag = Tag::new(&mut m);
    assert!(matches!(tag.read_block(&[0x01]), Err(Error::Io(_))));
    assert_eq!((m.connects, m.closes), (1, 1));
}
