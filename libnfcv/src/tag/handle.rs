// libnfcv/src/tag/handle.rs

use log::debug;

use crate::ndef::{NdefMessage, NdefOutcome};
use crate::protocol::codec;
use crate::protocol::{Command, Response, SystemInfo};
use crate::tag::config::TagConfig;
use crate::tag::operations;
use crate::tag::request::Request;
use crate::transport::{Connection, Transport};
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Session with one NFC-V tag in the field.
///
/// Every public operation opens its own connection and closes it again
/// before returning, whatever the outcome. Input is validated before the
/// transport is touched.
pub struct Tag<T: Transport> {
    transport: T,
    config: TagConfig,
}

impl<T: Transport> Tag<T> {
    /// Create a Tag with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, TagConfig::default())
    }

    pub fn with_config(transport: T, config: TagConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TagConfig) {
        self.config = config;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn connection(&mut self) -> Result<Connection<'_, T>> {
        Connection::open(&mut self.transport)
    }

    /// Read one block and return the raw response (status byte included).
    ///
    /// `address` must be exactly one byte. A lost tag yields an empty
    /// response.
    pub fn read_block(&mut self, address: &[u8]) -> Result<Vec<u8>> {
        let frame = codec::build_read_frame(address)?;
        debug!("read_block {}", crate::utils::bytes_to_hex(address));
        let mut conn = self.connection()?;
        conn.transceive(&frame)
    }

    /// Write one block and return the raw response (status byte included).
    /// The data length is not checked against the tag's block size.
    pub fn write_block(&mut self, address: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let frame = codec::build_write_frame(address, data)?;
        debug!(
            "write_block {} ({} byte(s))",
            crate::utils::bytes_to_hex(address),
            data.len()
        );
        let mut conn = self.connection()?;
        conn.transceive(&frame)
    }

    /// Send a caller-built frame unchanged and return the raw response.
    pub fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        let frame = codec::build_raw_frame(request);
        debug!("transceive {} byte(s)", request.len());
        let mut conn = self.connection()?;
        conn.transceive(&frame)
    }

    /// Execute a typed command and decode its response. A non-success
    /// status becomes `TagStatus`.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        let frame = codec::encode_command_frame(&cmd);
        let raw = {
            let mut conn = self.connection()?;
            conn.transceive(&frame)?
        };
        let response = codec::decode_response(&raw)?;
        Response::decode(cmd.command_code(), &response)
    }

    /// Query UID, memory layout and related fields with Get System Info.
    pub fn system_info(&mut self) -> Result<SystemInfo> {
        match self.execute(Command::GetSystemInfo)? {
            Response::GetSystemInfo(info) => Ok(info),
            other => Err(Error::UnexpectedResponse {
                expected: crate::constants::CMD_GET_SYSTEM_INFO,
                actual: other.command_code(),
            }),
        }
    }

    /// Read the TLV-framed NDEF message starting at the configured block.
    pub fn read_ndef(&mut self) -> Result<NdefOutcome> {
        if !self.config.read_ndef {
            debug!("NDEF reading disabled; skipping tag access");
            return Ok(NdefOutcome::NoNdefContent);
        }
        let start = self.config.ndef_block_address;
        let mut conn = self.connection()?;
        operations::read_ndef(&mut conn, start)
    }

    /// NDEF payload bytes, or an empty vector when the tag holds no NDEF
    /// TLV or a continuation block could not be read.
    pub fn read_ndef_payload(&mut self) -> Result<Vec<u8>> {
        Ok(self.read_ndef()?.into_bytes())
    }

    /// Read and parse the NDEF message. `None` when the tag holds none.
    pub fn read_ndef_message(&mut self) -> Result<Option<NdefMessage>> {
        match self.read_ndef()?.into_result()? {
            Some(bytes) if !bytes.is_empty() => NdefMessage::parse(&bytes).map(Some),
            _ => Ok(None),
        }
    }

    /// Block data without the status byte; a tag error becomes
    /// `BlockReadFailed`.
    pub fn read_block_data(&mut self, address: BlockAddress) -> Result<Vec<u8>> {
        let mut conn = self.connection()?;
        operations::read_block_data(&mut conn, address)
    }

    /// Write one block; a tag error becomes `BlockWriteFailed`.
    pub fn write_block_checked(&mut self, address: BlockAddress, data: &[u8]) -> Result<()> {
        let mut conn = self.connection()?;
        operations::write_block_checked(&mut conn, address, data)
    }

    /// Concatenated data of blocks `start..=end`, read over one connection.
    pub fn read_range(&mut self, start: BlockAddress, end: BlockAddress) -> Result<Vec<u8>> {
        let mut conn = self.connection()?;
        operations::read_range(&mut conn, start, end)
    }

    /// See [`operations::read_until`].
    pub fn read_until<F>(
        &mut self,
        start: BlockAddress,
        max_blocks: Option<usize>,
        keep_going: F,
    ) -> Result<Vec<(BlockAddress, Vec<u8>)>>
    where
        F: FnMut(&[u8], BlockAddress, usize) -> bool,
    {
        let mut conn = self.connection()?;
        operations::read_until(&mut conn, start, max_blocks, keep_going)
    }

    /// Write blocks in order over one connection, stopping at the first
    /// failure.
    pub fn write_blocks<D: AsRef<[u8]>>(&mut self, blocks: &[(BlockAddress, D)]) -> Result<()> {
        let mut conn = self.connection()?;
        operations::write_blocks(&mut conn, blocks)
    }

    /// Dispatch a typed bridge request. Results are raw responses, or the
    /// NDEF payload for `ReadNdef`.
    pub fn handle(&mut self, request: Request) -> Result<Vec<u8>> {
        match request {
            Request::ReadBlock(r) => {
                r.validate()?;
                self.read_block(&r.address)
            }
            Request::WriteBlock(r) => {
                r.validate()?;
                self.write_block(&r.address, &r.data)
            }
            Request::Transceive(r) => self.transceive(&r.data),
            Request::ReadNdef => self.read_ndef_payload(),
        }
    }
}
