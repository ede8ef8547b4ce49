// NDEF dump example against a simulated NFC-V tag

// Seeds a MockTransport with the block responses of a tag holding a Text
// record, then reads system info and the NDEF message from it. Run with
// RUST_LOG=trace to see every frame exchanged.

use libnfcv::ndef::{encode_text_record, wrap_ndef_message};
use libnfcv::prelude::*;
use libnfcv::test_support::ndef_block_responses;

fn simulated_tag() -> anyhow::Result<MockTransport> {
    let mut info = vec![0x00, 0x0F];
    info.extend_from_slice(&[0x3C, 0x1F, 0x8A, 0x52, 0x10, 0x00, 0x07, 0xE0]);
    info.extend_from_slice(&[0x00, 0x00, 0x3F, 0x03, 0x01]);

    let message = encode_text_record("en", "valve V-12 / serviced 2024-05")?;
    let memory = wrap_ndef_message(&message)?;

    let mut responses = vec![info];
    responses.extend(ndef_block_responses(&memory, 4));
    Ok(MockTransport::with_responses(responses))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut tag = TagBuilder::new().with_transport(simulated_tag()?).build()?;

    let info = tag.system_info()?;
    println!("UID = {}", info.uid.to_hex());
    if let (Some(count), Some(size)) = (info.block_count, info.block_size) {
        println!("Memory = {} blocks x {} bytes", count, size);
    }

    match tag.read_ndef_message()? {
        Some(msg) => {
            println!("NDEF message with {} record(s)", msg.records().len());
            if let Some(text) = msg.first_text() {
                println!("  Text [{}]: {}", text.language, text.text);
            }
        }
        None => println!("No NDEF content"),
    }

    let m = tag.into_inner();
    println!("{} frame(s) exchanged", m.sent.len());
    Ok(())
}
