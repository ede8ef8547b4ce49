// libnfcv/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the physical tag I/O away from protocol logic.
///
/// Implementations wrap whatever the platform offers for exchanging raw
/// NFC-V frames with a tag in the field. Errors are reported with the
/// crate `Error`: `TagUnavailable` when no tag is present, `TagLost` when the
/// tag left the field during an exchange, `Io` for anything else.
pub trait Transport {
    /// Acquire the tag connection. The default is a no-op for transports
    /// without an explicit connect step.
    fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    /// Send one request frame and return the raw response bytes.
    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>>;

    /// Release the tag connection.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(request)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(request)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
