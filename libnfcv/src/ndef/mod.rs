// libnfcv/src/ndef/mod.rs

//! NDEF-over-TLV handling: the TLV header, the block reassembly state
//! machine and a parser for the reassembled NDEF message.

pub mod outcome;
pub mod reassembler;
pub mod record;
pub mod tlv;

pub use outcome::NdefOutcome;
pub use reassembler::{Phase, Reassembler};
pub use record::{NdefMessage, NdefRecord, TextRecord, TypeNameFormat, encode_text_record};
pub use tlv::{TlvHeader, wrap_ndef_message};
