// libnfcv/src/ndef/reassembler.rs

use log::debug;

use crate::constants::NDEF_TLV_HEADER_LEN;
use crate::ndef::outcome::NdefOutcome;
use crate::ndef::tlv::TlvHeader;
use crate::protocol::ResponseFrame;
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Reassembly progress.
///
/// `Idle -> ReadingFirstBlock -> {NoNdef | ReadingContinuation* -> Complete | Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ReadingFirstBlock,
    ReadingContinuation,
    NoNdef,
    Complete,
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::NoNdef | Phase::Complete | Phase::Failed)
    }
}

/// Collects a TLV-framed NDEF message from consecutive block reads.
///
/// The reassembler performs no I/O. The caller asks for the next address
/// with `next_request`, reads that block and hands the decoded response to
/// `accept`, until the phase is terminal. The block size is taken from each
/// response, never assumed.
#[derive(Debug, Clone)]
pub struct Reassembler {
    start: BlockAddress,
    phase: Phase,
    /// Offset from `start` of the block currently being read
    offset: usize,
    declared: usize,
    remaining: usize,
    collected: Vec<u8>,
    failure: Option<(BlockAddress, u8, Option<u8>)>,
}

impl Reassembler {
    pub fn new(start: BlockAddress) -> Self {
        Self {
            start,
            phase: Phase::Idle,
            offset: 0,
            declared: 0,
            remaining: 0,
            collected: Vec::new(),
            failure: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Payload bytes still missing.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn collected(&self) -> &[u8] {
        &self.collected
    }

    /// Address of the block to read next, or `None` once reassembly has
    /// reached a terminal phase. Fails with `AddressOutOfRange` when the
    /// payload would continue past block `0xFF`.
    pub fn next_request(&mut self) -> Result<Option<BlockAddress>> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::ReadingFirstBlock;
                Ok(Some(self.start))
            }
            Phase::ReadingFirstBlock => Ok(Some(self.start)),
            Phase::ReadingContinuation => self.start.offset(self.offset).map(Some),
            Phase::NoNdef | Phase::Complete | Phase::Failed => Ok(None),
        }
    }

    /// Feed the response for the block returned by the last `next_request`.
    pub fn accept(&mut self, response: &ResponseFrame) -> Result<Phase> {
        match self.phase {
            Phase::Idle | Phase::ReadingFirstBlock => self.accept_first(response),
            Phase::ReadingContinuation => self.accept_continuation(response),
            Phase::NoNdef | Phase::Complete | Phase::Failed => Err(Error::UnsupportedOperation(
                "reassembly already finished".into(),
            )),
        }
    }

    /// Consume the reassembler. Fails with `InvalidLength` when called
    /// before the declared length was collected.
    pub fn finish(self) -> Result<NdefOutcome> {
        match self.phase {
            Phase::Complete => Ok(NdefOutcome::Payload(self.collected)),
            Phase::NoNdef => Ok(NdefOutcome::NoNdefContent),
            Phase::Failed => {
                let (address, status, code) = self.failure.ok_or(Error::UnsupportedOperation(
                    "failed reassembly without failing block".into(),
                ))?;
                Ok(NdefOutcome::ReassemblyFailed {
                    address,
                    status,
                    code,
                })
            }
            Phase::Idle | Phase::ReadingFirstBlock | Phase::ReadingContinuation => {
                Err(Error::InvalidLength {
                    expected: self.declared,
                    actual: self.collected.len(),
                })
            }
        }
    }

    fn accept_first(&mut self, response: &ResponseFrame) -> Result<Phase> {
        let payload = response.payload();
        if !response.is_success() || payload.first() != Some(&crate::constants::NDEF_TLV_TYPE) {
            debug!(
                "block {} holds no NDEF TLV (status={:#04x})",
                self.start,
                response.status()
            );
            self.phase = Phase::NoNdef;
            return Ok(self.phase);
        }

        let header = TlvHeader::parse(payload)?;
        self.declared = header.length as usize;
        self.remaining = self.declared;
        self.collected = Vec::with_capacity(self.declared);
        debug!("NDEF TLV declares {} byte(s)", self.declared);

        self.take(&payload[NDEF_TLV_HEADER_LEN..]);
        Ok(self.advance())
    }

    fn accept_continuation(&mut self, response: &ResponseFrame) -> Result<Phase> {
        let address = self.start.offset(self.offset)?;
        if !response.is_success() {
            debug!(
                "continuation block {} failed (status={:#04x}); {} byte(s) missing",
                address,
                response.status(),
                self.remaining
            );
            self.failure = Some((address, response.status(), response.error_code()));
            self.phase = Phase::Failed;
            return Ok(self.phase);
        }

        // A successful but empty block would never make progress.
        if response.payload().is_empty() {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }

        self.take(response.payload());
        Ok(self.advance())
    }

    fn take(&mut self, available: &[u8]) {
        let n = self.remaining.min(available.len());
        self.collected.extend_from_slice(&available[..n]);
        self.remaining -= n;
    }

    fn advance(&mut self) -> Phase {
        if self.remaining == 0 {
            self.phase = Phase::Complete;
        } else {
            self.offset += 1;
            self.phase = Phase::ReadingContinuation;
        }
        self.phase
    }
}
