use std::fmt;

use async_trait::async_trait;
use bandwire_frame::{decode_status, Status, STATUS_SIZE};
use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::error::{Result, TransportError};

/// A byte-stream connection to the device.
///
/// Implementations provide `acquire`, `send` and `read_some`; the provided
/// methods build the exact-length reads and the command/response exchange on
/// top of them. Every transport presents the same ordered byte stream.
#[async_trait]
pub trait Transport: Send {
    /// Transport-specific acquisition parameters.
    type Params: Clone + fmt::Debug + Send + Sync;

    /// Bind to a device. Replaces any previous binding.
    async fn acquire(&mut self, params: &Self::Params) -> Result<()>;

    /// Write `data`. `bulk` marks transfer payload as opposed to a command
    /// packet. Returns the number of bytes accepted.
    async fn send(&mut self, data: &[u8], bulk: bool) -> Result<usize>;

    /// Read at most `max` bytes. May return fewer; an empty buffer means the
    /// stream has closed.
    async fn read_some(&mut self, max: usize) -> Result<Bytes>;

    /// Read exactly `n` bytes.
    async fn read(&mut self, n: usize) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(n);
        while buf.len() < n {
            let chunk = self.read_some(n - buf.len()).await?;
            if chunk.is_empty() {
                return Err(TransportError::Disconnected(format!(
                    "stream ended after {} of {n} bytes",
                    buf.len()
                )));
            }
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }

    /// Send a command packet and its optional bulk transfer, then read the
    /// response payload and the status trailer.
    async fn communicate(
        &mut self,
        packet: &[u8],
        response_len: usize,
        transfer: Option<&[u8]>,
    ) -> Result<(Bytes, Status)> {
        self.send(packet, false).await?;
        debug!(len = packet.len(), "sent command packet");

        if let Some(transfer) = transfer {
            send_transfer(self, transfer).await?;
        }

        let response = if response_len > 0 {
            self.read(response_len).await?
        } else {
            Bytes::new()
        };
        let trailer = self.read(STATUS_SIZE).await?;

        match decode_status(&trailer) {
            Ok(status) => Ok((response, status)),
            Err(err) => {
                warn!(
                    response = %hex::encode(&response),
                    trailer = %hex::encode(&trailer),
                    "status trailer did not decode"
                );
                Err(err.into())
            }
        }
    }

    /// Transport-specific recovery after a failed exchange.
    async fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Push a bulk payload through `send`, however many calls it takes.
pub async fn send_transfer<T: Transport + ?Sized>(transport: &mut T, transfer: &[u8]) -> Result<()> {
    let mut sent = 0;
    while sent < transfer.len() {
        let written = transport.send(&transfer[sent..], true).await?;
        if written == 0 {
            return Err(TransportError::Disconnected(format!(
                "transfer stalled after {sent} of {} bytes",
                transfer.len()
            )));
        }
        sent += written;
        debug!(written, sent, total = transfer.len(), "transferred");
    }
    Ok(())
}
