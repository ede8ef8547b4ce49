// libnfcv/src/types.rs

use crate::Error;
use derive_more::{Display, From, Into};
use std::convert::TryFrom;

/// BlockAddress - Newtype Pattern (1 byte)
///
/// NFC-V single-block commands address one memory block with exactly one
/// byte. Multi-byte addresses coming from a bridge are rejected by
/// `TryFrom<&[u8]>` before any frame is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display(fmt = "{:#04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockAddress(u8);

impl BlockAddress {
    pub const NDEF: Self = Self(crate::constants::NDEF_BLOCK_ADDR);

    pub const fn new(address: u8) -> Self {
        Self(address)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Address `offset` blocks after this one, or `AddressOutOfRange` when
    /// the result no longer fits in one byte.
    pub fn offset(&self, offset: usize) -> crate::Result<Self> {
        let next = (self.0 as usize)
            .checked_add(offset)
            .filter(|a| *a <= u8::MAX as usize)
            .ok_or(Error::AddressOutOfRange {
                base: self.0,
                offset,
            })?;
        Ok(Self(next as u8))
    }
}

impl TryFrom<&[u8]> for BlockAddress {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes {
            [address] => Ok(Self(*address)),
            [] => Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            }),
            _ => Err(Error::AddressTooLong {
                actual: bytes.len(),
            }),
        }
    }
}

/// RequestFlags (u8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Into)]
#[display(fmt = "{:#04x}", _0)]
pub struct RequestFlags(u8);

impl RequestFlags {
    /// One subcarrier, high data rate. Used for every command in this crate.
    pub const HIGH_DATA_RATE: Self = Self(crate::constants::NFCV_REQUEST_FLAGS);

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for RequestFlags {
    fn default() -> Self {
        Self::HIGH_DATA_RATE
    }
}

/// UID - Newtype Pattern (8 bytes, as transmitted: least significant byte first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 8]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Hex in conventional reading order (most significant byte first).
    pub fn to_hex(&self) -> String {
        let mut msb_first = self.0;
        msb_first.reverse();
        crate::utils::bytes_to_hex(&msb_first)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}
