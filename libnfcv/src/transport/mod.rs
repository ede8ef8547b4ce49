// libnfcv/src/transport/mod.rs

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod connection;
pub mod mock;
pub mod traits;

#[cfg(feature = "async")]
pub use asynchronous::AsyncTransport;
pub use connection::Connection;
pub use mock::MockTransport;
pub use traits::Transport;
