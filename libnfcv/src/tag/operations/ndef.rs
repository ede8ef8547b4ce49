// libnfcv/src/tag/operations/ndef.rs

use log::debug;

use crate::ndef::{NdefOutcome, Reassembler};
use crate::transport::{Connection, Transport};
use crate::types::BlockAddress;
use crate::Result;

/// Drive a `Reassembler` from `start` over one connection.
///
/// Only blocks the declared TLV length requires are read. Transport and
/// decode failures propagate; tag status failures end up in the outcome.
pub fn read_ndef<T: Transport + ?Sized>(
    conn: &mut Connection<'_, T>,
    start: BlockAddress,
) -> Result<NdefOutcome> {
    let mut reassembler = Reassembler::new(start);
    while let Some(address) = reassembler.next_request()? {
        let response = conn.read_block(address)?;
        reassembler.accept(&response)?;
    }

    let outcome = reassembler.finish()?;
    match &outcome {
        NdefOutcome::Payload(p) => debug!("NDEF payload of {} byte(s) from {}", p.len(), start),
        NdefOutcome::NoNdefContent => debug!("no NDEF content at {}", start),
        NdefOutcome::ReassemblyFailed { address, status, .. } => {
            debug!("NDEF read failed at {} (status={:#04x})", address, status)
        }
    }
    Ok(outcome)
}
