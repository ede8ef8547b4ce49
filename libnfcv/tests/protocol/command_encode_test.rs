use libnfcv::protocol::{Command, codec};
use libnfcv::types::BlockAddress;
use libnfcv::Error;

#[test]
fn single_block_frames_are_bit_exact() {
    let read = Command::ReadSingleBlock {
        address: BlockAddress::new(0x05),
    };
    assert_eq!(read.command_code(), 0x20);
    assert_eq!(read.encode(), vec![0x02, 0x20, 0x05]);

    let write = Command::WriteSingleBlock {
        address: BlockAddress::new(0x03),
        data: vec![0xDE, 0xAD, 0xBE, 0xEF],
    };
    assert_eq!(write.command_code(), 0x21);
    assert_eq!(
        write.encode(),
        vec![0x02, 0x21, 0x03, 0xDE, 0xAD, 0xBE, 0xEF]
    );

    assert_eq!(Command::GetSystemInfo.encode(), vec![0x02, 0x2B]);
    assert_eq!(Command::GetSystemInfo.address(), None);
}

#[test]
fn byte_level_builders_validate_address() {
    assert_eq!(
        codec::build_read_frame(&[0x00]).unwrap().as_bytes(),
        &[0x02, 0x20, 0x00]
    );
    assert!(matches!(
        codec::build_read_frame(&[0x00, 0x05]),
        Err(Error::AddressTooLong { actual: 2 })
    ));
    assert!(matches!(
        codec::build_write_frame(&[1, 2, 3], &[0; 4]),
        Err(Error::AddressTooLong { actual: 3 })
    ));
}

#[test]
fn raw_frame_passes_through() {
    let raw = [0x22, 0x20, 0x11, 0x22, 0x33];
    assert_eq!(codec::build_raw_frame(&raw).into_bytes(), raw.to_vec());
}
