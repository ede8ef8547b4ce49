// libnfcv/src/prelude.rs

pub use crate::ndef::{NdefMessage, NdefOutcome, NdefRecord, TextRecord};
pub use crate::protocol::{Command, Response, SystemInfo};
pub use crate::tag::{Request, Tag, TagBuilder, TagConfig};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{BlockAddress, Error, RequestFlags, Result, Uid};

#[cfg(feature = "async")]
pub use crate::transport::AsyncTransport;

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
