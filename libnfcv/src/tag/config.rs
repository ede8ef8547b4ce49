// libnfcv/src/tag/config.rs

//! Per-session tag configuration

use crate::types::BlockAddress;

/// Settings threaded explicitly through a `Tag` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TagConfig {
    /// First block of the TLV-encoded NDEF message
    pub ndef_block_address: BlockAddress,
    /// When false, NDEF reads report no content without touching the tag.
    /// Used for tags that do not carry NDEF.
    pub read_ndef: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            ndef_block_address: BlockAddress::NDEF,
            read_ndef: true,
        }
    }
}

impl TagConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ndef_block_address(mut self, address: BlockAddress) -> Self {
        self.ndef_block_address = address;
        self
    }

    pub fn read_ndef(mut self, enabled: bool) -> Self {
        self.read_ndef = enabled;
        self
    }
}
