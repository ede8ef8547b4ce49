// libnfcv/src/tag/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod operations;
pub mod request;

pub use builder::TagBuilder;
pub use config::TagConfig;
pub use handle::Tag;
pub use request::{ReadBlockRequest, Request, TransceiveRequest, WriteBlockRequest};
