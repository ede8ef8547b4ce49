// libnfcv/src/transport/asynchronous.rs

//! Async counterparts of the blocking tag operations.
//!
//! Async code cannot close a transport from `Drop`, so every driver here
//! closes explicitly on all exit paths once `connect` has succeeded.

use async_trait::async_trait;
use log::{debug, trace, warn};

use crate::ndef::{NdefOutcome, Reassembler};
use crate::protocol::{Command, CommandFrame, codec};
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Async transport abstraction.
#[async_trait]
pub trait AsyncTransport: Send {
    async fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    async fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>>;

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl AsyncTransport for MockTransport {
    async fn connect(&mut self) -> Result<()> {
        Transport::connect(self)
    }

    async fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        Transport::transceive(self, request)
    }

    async fn close(&mut self) -> Result<()> {
        Transport::close(self)
    }
}

async fn open<T: AsyncTransport + ?Sized>(transport: &mut T) -> Result<()> {
    if let Err(e) = transport.connect().await {
        if let Err(close_err) = transport.close().await {
            warn!("close after failed connect also failed: {}", close_err);
        }
        return Err(e);
    }
    debug!("tag connection opened");
    Ok(())
}

async fn close<T: AsyncTransport + ?Sized>(transport: &mut T) {
    match transport.close().await {
        Ok(()) => debug!("tag connection closed"),
        Err(e) => warn!("failed to close tag connection: {}", e),
    }
}

async fn exchange<T: AsyncTransport + ?Sized>(
    transport: &mut T,
    frame: &CommandFrame,
) -> Result<Vec<u8>> {
    trace!("-> [{}]", crate::utils::bytes_to_hex_spaced(frame.as_bytes()));
    match transport.transceive(frame.as_bytes()).await {
        Ok(response) => {
            trace!("<- [{}]", crate::utils::bytes_to_hex_spaced(&response));
            Ok(response)
        }
        Err(Error::TagLost) => {
            warn!("tag lost during transceive; substituting empty response");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Send a raw frame in its own connection. A lost tag yields an empty
/// response.
pub async fn transceive_async<T: AsyncTransport + ?Sized>(
    transport: &mut T,
    request: &[u8],
) -> Result<Vec<u8>> {
    let frame = codec::build_raw_frame(request);
    open(transport).await?;
    let result = exchange(transport, &frame).await;
    close(transport).await;
    result
}

/// Read one block in its own connection and return the raw response.
pub async fn read_block_async<T: AsyncTransport + ?Sized>(
    transport: &mut T,
    address: &[u8],
) -> Result<Vec<u8>> {
    let frame = codec::build_read_frame(address)?;
    open(transport).await?;
    let result = exchange(transport, &frame).await;
    close(transport).await;
    result
}

/// Reassemble the NDEF message starting at `start` over one connection.
pub async fn read_ndef_async<T: AsyncTransport + ?Sized>(
    transport: &mut T,
    start: BlockAddress,
) -> Result<NdefOutcome> {
    open(transport).await?;
    let result = reassemble(transport, start).await;
    close(transport).await;
    result
}

async fn reassemble<T: AsyncTransport + ?Sized>(
    transport: &mut T,
    start: BlockAddress,
) -> Result<NdefOutcome> {
    let mut reassembler = Reassembler::new(start);
    while let Some(address) = reassembler.next_request()? {
        let frame = codec::encode_command_frame(&Command::ReadSingleBlock { address });
        let raw = exchange(transport, &frame).await?;
        reassembler.accept(&codec::decode_response(&raw)?)?;
    }
    reassembler.finish()
}
