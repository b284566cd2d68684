use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use bandwire_frame::Status;
use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::error::Result;
use crate::traits::{send_transfer, Transport};

/// What a [`MockTransport`] has seen, shared with whoever holds a handle.
#[derive(Debug, Default)]
pub struct MockRecord {
    /// Command packets, in send order.
    pub packets: Vec<Bytes>,
    /// Bulk transfer bytes, one entry per exchange that carried a transfer.
    pub transfers: Vec<Bytes>,
    pub exchanges: usize,
    pub acquires: usize,
    pub resets: usize,
}

/// Cloneable view of a mock's traffic log.
#[derive(Debug, Clone, Default)]
pub struct MockLog(Arc<Mutex<MockRecord>>);

impl MockLog {
    fn lock(&self) -> MutexGuard<'_, MockRecord> {
        // A poisoned log only means a test panicked mid-update.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn packets(&self) -> Vec<Bytes> {
        self.lock().packets.clone()
    }

    pub fn transfers(&self) -> Vec<Bytes> {
        self.lock().transfers.clone()
    }

    pub fn exchanges(&self) -> usize {
        self.lock().exchanges
    }

    pub fn acquires(&self) -> usize {
        self.lock().acquires
    }

    pub fn resets(&self) -> usize {
        self.lock().resets
    }
}

/// Hardware-free transport.
///
/// `read` yields zeros. `communicate` answers with the next scripted reply if
/// one is queued, otherwise a zero-filled payload and the default status.
#[derive(Debug)]
pub struct MockTransport {
    status: Status,
    replies: VecDeque<(Bytes, Status)>,
    log: MockLog,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(Status::SUCCESS)
    }
}

impl MockTransport {
    /// A mock that answers every exchange with `status`.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            replies: VecDeque::new(),
            log: MockLog::default(),
        }
    }

    /// Queue a reply for the next exchange. The payload is zero-padded or
    /// truncated to the requested response length.
    pub fn push_reply(&mut self, payload: impl Into<Bytes>, status: Status) {
        self.replies.push_back((payload.into(), status));
    }

    pub fn with_reply(mut self, payload: impl Into<Bytes>, status: Status) -> Self {
        self.push_reply(payload, status);
        self
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Handle to the traffic log; stays valid after the mock is moved.
    pub fn log(&self) -> MockLog {
        self.log.clone()
    }
}

fn fit(payload: &[u8], len: usize) -> Bytes {
    let mut buf = BytesMut::zeroed(len);
    let n = payload.len().min(len);
    buf[..n].copy_from_slice(&payload[..n]);
    buf.freeze()
}

#[async_trait]
impl Transport for MockTransport {
    type Params = ();

    async fn acquire(&mut self, _params: &()) -> Result<()> {
        self.log.lock().acquires += 1;
        Ok(())
    }

    async fn send(&mut self, data: &[u8], _bulk: bool) -> Result<usize> {
        Ok(data.len())
    }

    async fn read_some(&mut self, max: usize) -> Result<Bytes> {
        Ok(Bytes::from(vec![0; max]))
    }

    async fn communicate(
        &mut self,
        packet: &[u8],
        response_len: usize,
        transfer: Option<&[u8]>,
    ) -> Result<(Bytes, Status)> {
        self.send(packet, false).await?;
        if let Some(transfer) = transfer {
            send_transfer(self, transfer).await?;
        }

        {
            let mut record = self.log.lock();
            record.exchanges += 1;
            record.packets.push(Bytes::copy_from_slice(packet));
            if let Some(transfer) = transfer {
                record.transfers.push(Bytes::copy_from_slice(transfer));
            }
        }

        let (payload, status) = match self.replies.pop_front() {
            Some((payload, status)) => (fit(&payload, response_len), status),
            None => (Bytes::from(vec![0; response_len]), self.status),
        };
        debug!(response_len, %status, "mock exchange");
        Ok((payload, status))
    }

    async fn reset(&mut self) -> Result<()> {
        self.log.lock().resets += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bandwire_frame::{Facility, Severity};

    use super::*;

    #[tokio::test]
    async fn read_returns_zeros() {
        let mut mock = MockTransport::default();
        let bytes = mock.read(5).await.unwrap();
        assert_eq!(&bytes[..], &[0; 5]);
    }

    #[tokio::test]
    async fn communicate_uses_canned_status() {
        let status = Status::new(true, Severity::Error, Facility::LIBRARY_JUTIL, 8);
        let mut mock = MockTransport::new(status);
        let log = mock.log();

        let (payload, got) = mock.communicate(&[1, 2, 3], 4, None).await.unwrap();
        assert_eq!(&payload[..], &[0; 4]);
        assert_eq!(got, status);
        assert_eq!(log.exchanges(), 1);
        assert_eq!(&log.packets()[0][..], &[1, 2, 3]);
        assert!(log.transfers().is_empty());
    }

    #[tokio::test]
    async fn scripted_replies_are_fitted_to_length() {
        let mut mock = MockTransport::default()
            .with_reply(vec![31, 0, 0, 0, 99], Status::SUCCESS)
            .with_reply(vec![7], Status::SUCCESS);

        let (first, _) = mock.communicate(&[0], 4, None).await.unwrap();
        assert_eq!(&first[..], &[31, 0, 0, 0]);
        let (second, _) = mock.communicate(&[0], 3, None).await.unwrap();
        assert_eq!(&second[..], &[7, 0, 0]);
        let (third, status) = mock.communicate(&[0], 2, None).await.unwrap();
        assert_eq!(&third[..], &[0, 0]);
        assert_eq!(status, Status::SUCCESS);
    }

    #[tokio::test]
    async fn transfer_is_logged() {
        let mut mock = MockTransport::default();
        let log = mock.log();
        mock.communicate(&[0], 0, Some(&[9; 100])).await.unwrap();
        assert_eq!(log.transfers()[0].len(), 100);
    }

    #[tokio::test]
    async fn default_trait_communicate_decodes_zero_trailer_as_bad_magic() {
        struct Zeros;

        #[async_trait]
        impl Transport for Zeros {
            type Params = ();

            async fn acquire(&mut self, _params: &()) -> Result<()> {
                Ok(())
            }

            async fn send(&mut self, data: &[u8], _bulk: bool) -> Result<usize> {
                Ok(data.len())
            }

            async fn read_some(&mut self, max: usize) -> Result<Bytes> {
                Ok(Bytes::from(vec![0; max]))
            }
        }

        let result = Zeros.communicate(&[0], 2, None).await;
        assert!(matches!(
            result,
            Err(crate::TransportError::Framing(
                bandwire_frame::FrameError::BadMagic { .. }
            ))
        ));
    }
}
