// libnfcv/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses (or queued errors) in order.
#[derive(Debug)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Result<Vec<u8>>>,
    /// Whether a tag is in the field; `connect` fails with `TagUnavailable`
    /// when false.
    pub present: bool,
    pub connects: usize,
    pub closes: usize,
    connected: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            responses: VecDeque::new(),
            present: true,
            connects: 0,
            closes: 0,
            connected: false,
        }
    }

    /// Build a mock pre-seeded with raw responses.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut m = Self::new();
        for r in responses {
            m.push_response(r);
        }
        m
    }

    pub fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a failure for the next transceive call.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push_back(Err(err));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<()> {
        if !self.present {
            return Err(Error::TagUnavailable);
        }
        self.connects += 1;
        self.connected = true;
        Ok(())
    }

    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(Error::Io("transceive on closed connection".into()));
        }
        self.sent.push(request.to_vec());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(Error::Io("no response queued".into())))
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        self.connected = false;
        Ok(())
    }
}
