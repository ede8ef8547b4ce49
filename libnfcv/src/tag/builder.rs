// libnfcv/src/tag/builder.rs

use crate::tag::config::TagConfig;
use crate::tag::handle::Tag;
use crate::transport::Transport;
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Helper to construct a Tag session with optional configuration.
pub struct TagBuilder<T> {
    transport: Option<T>,
    config: TagConfig,
}

impl<T: Transport> Default for TagBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> TagBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: TagConfig::default(),
        }
    }

    /// Provide the transport of the tag in the field (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn config(mut self, config: TagConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ndef_block_address(mut self, address: BlockAddress) -> Self {
        self.config = self.config.ndef_block_address(address);
        self
    }

    pub fn read_ndef(mut self, enabled: bool) -> Self {
        self.config = self.config.read_ndef(enabled);
        self
    }

    /// Consume the builder and return a Tag session.
    /// Requires a transport; otherwise returns TagUnavailable.
    pub fn build(self) -> Result<Tag<T>> {
        match self.transport {
            Some(t) => Ok(Tag::with_config(t, self.config)),
            None => Err(Error::TagUnavailable),
        }
    }
}
