// libnfcv/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use codec::{build_raw_frame, build_read_frame, build_write_frame, decode_response};
pub use commands::*;
pub use frame::{CommandFrame, ResponseFrame};
pub use responses::*;
