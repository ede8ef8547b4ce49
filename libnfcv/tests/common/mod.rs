// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod fixtures;

use libnfcv::transport::mock::MockTransport;

/// Queue every response on a fresh mock transport.
pub fn mock_with(responses: Vec<Vec<u8>>) -> MockTransport {
    MockTransport::with_responses(responses)
}

/// Enable log output for a test run when RUST_LOG is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
