//! BLE transport over the Zippy GATT protocol.
//!
//! Zippy carries the same command/response byte stream as USB and RFCOMM
//! across several characteristics:
//!
//! 1. The host takes the cooperative lock by writing a [`LockPacket`] and
//!    waiting until the device echoes the host's application id.
//! 2. The max-aligned characteristic gives the fragment payload size.
//! 3. Outgoing bytes are written as sequence-numbered fragments, followed by
//!    a [`ControlPacket`] with the total length; the device acknowledges on
//!    the write-control channel.
//! 4. Incoming messages are announced on the read-control channel and arrive
//!    as fragments spread over two notifying characteristics. The host
//!    reassembles them and writes an acknowledgement back.
//! 5. The lock is always released, whatever happened in between.
//!
//! Bulk transfers are not part of Zippy; `send(.., bulk = true)` and
//! transfer payloads fail with [`TransportError::Unsupported`].

#[cfg(feature = "ble")]
pub mod btle;
mod channels;
mod link;
pub mod packet;
pub mod reassembly;

use std::time::Duration;

use async_trait::async_trait;
use bandwire_frame::{decode_status, Status, STATUS_SIZE};
use bytes::Bytes;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use crate::error::{Result, TransportError};
use crate::packets::Surplus;
use crate::traits::Transport;

pub use channels::ZippyChannel;
pub use link::GattLink;
pub use packet::{ControlPacket, LockPacket};
pub use reassembly::{Message, Progress, Reassembler};

use channels::{spawn_router, Inboxes, Router};

/// Zippy session settings.
#[derive(Debug, Clone)]
pub struct ZippyConfig {
    /// Identifier the host presents when taking the lock.
    pub app_id: Uuid,
    /// Give up on taking or releasing the lock after this long.
    pub lock_timeout: Duration,
    /// Re-send the lock request at this interval while waiting.
    pub lock_retry_interval: Duration,
    /// Bound on each acknowledgement, announcement and fragment wait.
    pub response_timeout: Duration,
    /// Capacity of each per-characteristic notification queue. Once a queue
    /// is full, routing waits for the reader.
    pub notification_capacity: usize,
}

impl Default for ZippyConfig {
    fn default() -> Self {
        Self {
            app_id: Uuid::new_v4(),
            lock_timeout: Duration::from_secs(5),
            lock_retry_interval: Duration::from_millis(50),
            response_timeout: Duration::from_secs(10),
            notification_capacity: 64,
        }
    }
}

struct Connected {
    // Dropping the router stops notification delivery.
    _router: Router,
    inboxes: Inboxes,
}

/// Transport over a [`GattLink`].
pub struct ZippyTransport<L: GattLink> {
    link: L,
    config: ZippyConfig,
    connected: Option<Connected>,
    max_aligned: Option<usize>,
    pending: Surplus,
}

impl<L: GattLink> std::fmt::Debug for ZippyTransport<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZippyTransport")
            .field("config", &self.config)
            .field("connected", &self.connected.is_some())
            .field("max_aligned", &self.max_aligned)
            .field("pending", &self.pending.len())
            .finish()
    }
}

async fn wait<T>(
    limit: Duration,
    what: &str,
    rx: &mut tokio::sync::mpsc::Receiver<T>,
) -> Result<T> {
    match timeout(limit, rx.recv()).await {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(TransportError::Disconnected(format!(
            "notification stream closed waiting for {what}"
        ))),
        Err(_) => Err(TransportError::Timeout(limit)),
    }
}

impl<L: GattLink> ZippyTransport<L> {
    pub fn new(link: L) -> Self {
        Self::with_config(link, ZippyConfig::default())
    }

    pub fn with_config(link: L, config: ZippyConfig) -> Self {
        Self {
            link,
            config,
            connected: None,
            max_aligned: None,
            pending: Surplus::default(),
        }
    }

    pub fn config(&self) -> &ZippyConfig {
        &self.config
    }

    /// The underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    fn inboxes(connected: &mut Option<Connected>) -> Result<&mut Inboxes> {
        connected
            .as_mut()
            .map(|c| &mut c.inboxes)
            .ok_or(TransportError::NotAcquired)
    }

    /// Take the device lock, re-requesting until the device echoes our id.
    async fn acquire_lock(&mut self) -> Result<()> {
        let app_id = self.config.app_id;
        let request = LockPacket::new(app_id, true).encode();
        let deadline = Instant::now() + self.config.lock_timeout;

        loop {
            self.link.write(ZippyChannel::Lock, &request).await?;
            let retry_at = (Instant::now() + self.config.lock_retry_interval).min(deadline);
            let inboxes = Self::inboxes(&mut self.connected)?;

            loop {
                let data = match timeout_at(retry_at, inboxes.lock.recv()).await {
                    Ok(Some(data)) => data,
                    Ok(None) => {
                        return Err(TransportError::Disconnected(
                            "notification stream closed waiting for lock".into(),
                        ))
                    }
                    Err(_) => break,
                };
                match LockPacket::decode(&data) {
                    Ok(lock) if lock.locked && lock.app_id == app_id => {
                        trace!(%app_id, "lock acquired");
                        return Ok(());
                    }
                    Ok(lock) => trace!(owner = %lock.app_id, locked = lock.locked, "lock held elsewhere"),
                    Err(err) => warn!(error = %err, "ignoring malformed lock notification"),
                }
            }

            if Instant::now() >= deadline {
                return Err(TransportError::LockTimeout(self.config.lock_timeout));
            }
        }
    }

    /// Release the lock. A device showing no owner, or another owner, counts
    /// as released.
    async fn release_lock(&mut self) -> Result<()> {
        let app_id = self.config.app_id;
        self.link
            .write(ZippyChannel::Lock, &LockPacket::new(app_id, false).encode())
            .await?;

        let deadline = Instant::now() + self.config.lock_timeout;
        let inboxes = Self::inboxes(&mut self.connected)?;
        loop {
            let data = match timeout_at(deadline, inboxes.lock.recv()).await {
                Ok(Some(data)) => data,
                Ok(None) => {
                    return Err(TransportError::Disconnected(
                        "notification stream closed waiting for lock release".into(),
                    ))
                }
                Err(_) => return Err(TransportError::LockTimeout(self.config.lock_timeout)),
            };
            match LockPacket::decode(&data) {
                Ok(lock) if lock.is_free() || lock.app_id != app_id => {
                    trace!("lock released");
                    return Ok(());
                }
                Ok(_) => continue,
                Err(err) => warn!(error = %err, "ignoring malformed lock notification"),
            }
        }
    }

    async fn max_aligned(&mut self) -> Result<usize> {
        if let Some(size) = self.max_aligned {
            return Ok(size);
        }
        let raw = self.link.read(ZippyChannel::MaxAligned).await?;
        let size = packet::decode_max_aligned(&raw)?;
        debug!(size, "max aligned fragment size");
        self.max_aligned = Some(size);
        Ok(size)
    }

    /// Write one message as fragments, announce it, and wait for the ack.
    async fn send_message(&mut self, data: &[u8]) -> Result<()> {
        let length = u16::try_from(data.len()).map_err(|_| TransportError::PacketTooLarge {
            size: data.len(),
            max: u16::MAX as usize,
        })?;
        let size = self.max_aligned().await?;

        for (index, chunk) in data.chunks(size).enumerate() {
            let fragment = packet::encode_fragment(index as u8, chunk);
            self.link.write(ZippyChannel::Write1, &fragment).await?;
        }
        self.link
            .write(ZippyChannel::WriteControl, &ControlPacket::new(length).encode())
            .await?;

        let limit = self.config.response_timeout;
        let inboxes = Self::inboxes(&mut self.connected)?;
        let ack = wait(limit, "write acknowledgement", &mut inboxes.write_control).await?;
        match ack.first() {
            Some(&packet::ACK_OK) => {
                debug!(len = data.len(), "zippy message sent");
                Ok(())
            }
            Some(&ack) => Err(TransportError::ProtocolNack { ack }),
            None => Err(TransportError::Protocol("empty write acknowledgement".into())),
        }
    }

    /// Wait for one announced message and reassemble it.
    async fn receive_message(&mut self) -> Result<Message> {
        let limit = self.config.response_timeout;
        let inboxes = Self::inboxes(&mut self.connected)?;
        let announce = wait(limit, "message announcement", &mut inboxes.read_control).await?;
        let announced = ControlPacket::decode(&announce)?.length as usize;
        trace!(announced, "incoming message");

        let mut reassembler = Reassembler::new(announced);
        let outcome = Self::collect(limit, inboxes, &mut reassembler).await;
        let ack = outcome.is_ok() && reassembler.ack();
        self.link
            .write(
                ZippyChannel::ReadControl,
                &[if ack { packet::ACK_OK } else { packet::ACK_FAILED }],
            )
            .await?;
        outcome?;
        if !ack {
            return Err(TransportError::Reassembly(format!(
                "received {} of {announced} bytes",
                reassembler.received()
            )));
        }

        let message = reassembler.finish();
        debug!(
            len = message.body.len(),
            trailer = message.trailer.is_some(),
            "zippy message received"
        );
        Ok(message)
    }

    /// Pull fragments from both read channels until the message is complete.
    async fn collect(
        limit: Duration,
        inboxes: &mut Inboxes,
        reassembler: &mut Reassembler,
    ) -> Result<()> {
        while !reassembler.is_complete() {
            let next = timeout(limit, async {
                tokio::select! {
                    Some(data) = inboxes.read_1.recv() => Some(data),
                    Some(data) = inboxes.read_2.recv() => Some(data),
                    else => None,
                }
            })
            .await
            .map_err(|_| TransportError::Timeout(limit))?;
            let data = next.ok_or_else(|| {
                TransportError::Disconnected("notification stream closed mid-message".into())
            })?;
            let (id, payload) = packet::decode_fragment(&data)?;
            reassembler.push(id, payload)?;
        }
        Ok(())
    }

    async fn exchange(&mut self, packet: &[u8], response_len: usize) -> Result<(Bytes, Status)> {
        self.send_message(packet).await?;

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

    fn clear_stale(&mut self) {
        self.pending.clear();
        self.max_aligned = None;
        if let Some(connected) = self.connected.as_mut() {
            let dropped = connected.inboxes.drain();
            if dropped > 0 {
                debug!(dropped, "discarded stale notifications");
            }
        }
    }
}

#[async_trait]
impl<L> Transport for ZippyTransport<L>
where
    L: GattLink,
{
    type Params = L::Target;

    async fn acquire(&mut self, target: &L::Target) -> Result<()> {
        self.connected = None;
        self.clear_stale();
        self.link.connect(target).await?;
        let notifications = self.link.notifications().await?;
        let (router, inboxes) = spawn_router(notifications, self.config.notification_capacity);
        self.connected = Some(Connected {
            _router: router,
            inboxes,
        });
        info!(?target, app_id = %self.config.app_id, "zippy link acquired");
        Ok(())
    }

    async fn send(&mut self, data: &[u8], bulk: bool) -> Result<usize> {
        if bulk {
            return Err(TransportError::Unsupported("bulk transfer over BLE"));
        }
        self.send_message(data).await?;
        Ok(data.len())
    }

    async fn read_some(&mut self, max: usize) -> Result<Bytes> {
        if !self.pending.is_empty() {
            return Ok(self.pending.take(max));
        }
        let message = self.receive_message().await?;
        Ok(self.pending.split(message.into_stream_bytes(), max))
    }

    async fn communicate(
        &mut self,
        packet: &[u8],
        response_len: usize,
        transfer: Option<&[u8]>,
    ) -> Result<(Bytes, Status)> {
        if transfer.is_some_and(|t| !t.is_empty()) {
            return Err(TransportError::Unsupported("bulk transfer over BLE"));
        }
        if self.connected.is_none() {
            return Err(TransportError::NotAcquired);
        }
        self.clear_stale();

        self.acquire_lock().await?;
        let result = self.exchange(packet, response_len).await;
        let released = self.release_lock().await;

        match (result, released) {
            (Ok(reply), Ok(())) => Ok(reply),
            (Ok(reply), Err(err)) => {
                warn!(error = %err, "zippy lock release not confirmed");
                Ok(reply)
            }
            (Err(err), released) => {
                if let Err(release) = released {
                    warn!(error = %release, "zippy lock release not confirmed");
                }
                Err(err)
            }
        }
    }

    async fn reset(&mut self) -> Result<()> {
        self.clear_stale();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use bandwire_frame::{status_bytes, Facility, Severity};
    use futures::stream::{self, BoxStream, StreamExt};
    use tokio::sync::mpsc;

    use super::*;

    const APP: Uuid = Uuid::from_u128(0x5ca1ab1e_0000_4000_8000_000000000001);
    const OTHER: Uuid = Uuid::from_u128(0x0dd0_0000_4000_8000_000000000002);

    /// A reply the fake firmware sends once it has acknowledged a message.
    struct Reply {
        announced: u16,
        fragments: Vec<(ZippyChannel, u8, Vec<u8>)>,
    }

    #[derive(Default)]
    struct Firmware {
        writes: Vec<(ZippyChannel, Vec<u8>)>,
        owner: Option<Uuid>,
        /// Lock held by another application for good.
        contended: bool,
        write_ack: u8,
        replies: VecDeque<Reply>,
        max_aligned: Vec<u8>,
    }

    #[derive(Clone)]
    struct FakeLink {
        firmware: Arc<Mutex<Firmware>>,
        notify: mpsc::UnboundedSender<(ZippyChannel, Bytes)>,
        source: Arc<Mutex<Option<mpsc::UnboundedReceiver<(ZippyChannel, Bytes)>>>>,
    }

    impl FakeLink {
        fn new(firmware: Firmware) -> Self {
            let (notify, rx) = mpsc::unbounded_channel();
            Self {
                firmware: Arc::new(Mutex::new(firmware)),
                notify,
                source: Arc::new(Mutex::new(Some(rx))),
            }
        }

        fn emit(&self, channel: ZippyChannel, data: Vec<u8>) {
            let _ = self.notify.send((channel, Bytes::from(data)));
        }

        fn writes(&self) -> Vec<(ZippyChannel, Vec<u8>)> {
            self.firmware.lock().unwrap().writes.clone()
        }

        fn writes_to(&self, channel: ZippyChannel) -> Vec<Vec<u8>> {
            self.writes()
                .into_iter()
                .filter(|(c, _)| *c == channel)
                .map(|(_, data)| data)
                .collect()
        }
    }

    #[async_trait]
    impl GattLink for FakeLink {
        type Target = String;

        async fn connect(&mut self, _target: &String) -> Result<()> {
            Ok(())
        }

        async fn write(&mut self, channel: ZippyChannel, data: &[u8]) -> Result<()> {
            let mut fw = self.firmware.lock().unwrap();
            fw.writes.push((channel, data.to_vec()));
            match channel {
                ZippyChannel::Lock => {
                    let request = LockPacket::decode(data)?;
                    let echo = if fw.contended {
                        LockPacket::new(OTHER, true)
                    } else if request.locked {
                        fw.owner = Some(request.app_id);
                        request
                    } else {
                        fw.owner = None;
                        LockPacket::new(Uuid::nil(), false)
                    };
                    self.emit(ZippyChannel::Lock, echo.encode().to_vec());
                }
                ZippyChannel::WriteControl => {
                    let ack = fw.write_ack;
                    self.emit(ZippyChannel::WriteControl, vec![ack]);
                    if ack == packet::ACK_OK {
                        if let Some(reply) = fw.replies.pop_front() {
                            self.emit(
                                ZippyChannel::ReadControl,
                                ControlPacket::new(reply.announced).encode().to_vec(),
                            );
                            for (channel, id, payload) in reply.fragments {
                                self.emit(channel, packet::encode_fragment(id, &payload).to_vec());
                            }
                        }
                    }
                }
                _ => {}
            }
            Ok(())
        }

        async fn read(&mut self, channel: ZippyChannel) -> Result<Bytes> {
            match channel {
                ZippyChannel::MaxAligned => {
                    Ok(Bytes::from(self.firmware.lock().unwrap().max_aligned.clone()))
                }
                _ => Ok(Bytes::new()),
            }
        }

        async fn notifications(&mut self) -> Result<BoxStream<'static, (ZippyChannel, Bytes)>> {
            let rx = self
                .source
                .lock()
                .unwrap()
                .take()
                .ok_or_else(|| TransportError::Disconnected("already subscribed".into()))?;
            Ok(stream::unfold(rx, |mut rx| async move {
                rx.recv().await.map(|item| (item, rx))
            })
            .boxed())
        }
    }

    fn firmware() -> Firmware {
        Firmware {
            write_ack: packet::ACK_OK,
            max_aligned: vec![20],
            ..Firmware::default()
        }
    }

    fn config() -> ZippyConfig {
        ZippyConfig {
            app_id: APP,
            ..ZippyConfig::default()
        }
    }

    async fn transport(firmware: Firmware) -> (ZippyTransport<FakeLink>, FakeLink) {
        let link = FakeLink::new(firmware);
        let handle = link.clone();
        let mut transport = ZippyTransport::with_config(link, config());
        transport.acquire(&"band".to_string()).await.unwrap();
        (transport, handle)
    }

    fn response_with_status(body: std::ops::Range<u8>, status: &Status) -> Vec<u8> {
        let mut bytes: Vec<u8> = body.collect();
        bytes.extend_from_slice(&status_bytes(status));
        bytes
    }

    #[tokio::test]
    async fn status_trailer_in_final_fragment_needs_no_further_read() {
        let status = Status::new(true, Severity::Error, Facility::LIBRARY_JUTIL, 8);
        let stream = response_with_status(0..40, &status);
        let mut fw = firmware();
        fw.replies.push_back(Reply {
            announced: 46,
            fragments: vec![
                (ZippyChannel::Read1, 0, stream[..20].to_vec()),
                (ZippyChannel::Read2, 1, stream[20..40].to_vec()),
                (ZippyChannel::Read1, 2, stream[40..].to_vec()),
            ],
        });
        let (mut transport, link) = transport(fw).await;
        link.emit(ZippyChannel::Error, vec![0xDE, 0xAD]);

        let command = [0xF9, 0x2E, 0x86, 0x76, 4, 0, 0, 0];
        let (response, got) = transport.communicate(&command, 40, None).await.unwrap();
        assert_eq!(&response[..], &stream[..40]);
        assert_eq!(got, status);

        // One inbound message, acknowledged once.
        assert_eq!(link.writes_to(ZippyChannel::ReadControl), vec![vec![packet::ACK_OK]]);
        assert_eq!(
            link.writes_to(ZippyChannel::Write1),
            vec![packet::encode_fragment(0, &command).to_vec()]
        );
        assert_eq!(
            link.writes_to(ZippyChannel::WriteControl),
            vec![vec![0xE0, 8, 0]]
        );

        let locks = link.writes_to(ZippyChannel::Lock);
        assert_eq!(LockPacket::decode(&locks[0]).unwrap(), LockPacket::new(APP, true));
        assert_eq!(
            LockPacket::decode(locks.last().unwrap()).unwrap(),
            LockPacket::new(APP, false)
        );
        assert_eq!(link.firmware.lock().unwrap().owner, None);
    }

    #[tokio::test]
    async fn outgoing_message_is_fragmented_at_max_aligned() {
        let mut fw = firmware();
        fw.max_aligned = vec![4];
        fw.replies.push_back(Reply {
            announced: 6,
            fragments: vec![(
                ZippyChannel::Read1,
                0,
                status_bytes(&Status::SUCCESS).to_vec(),
            )],
        });
        let (mut transport, link) = transport(fw).await;

        let command: Vec<u8> = (0..10).collect();
        let (response, status) = transport.communicate(&command, 0, None).await.unwrap();
        assert!(response.is_empty());
        assert_eq!(status, Status::SUCCESS);
        assert_eq!(
            link.writes_to(ZippyChannel::Write1),
            vec![vec![0, 0, 1, 2, 3], vec![1, 4, 5, 6, 7], vec![2, 8, 9]]
        );
    }

    #[tokio::test]
    async fn early_fragment_is_parked_and_order_preserved() {
        let stream = response_with_status(0..24, &Status::SUCCESS);
        let mut fw = firmware();
        fw.replies.push_back(Reply {
            announced: 30,
            fragments: vec![
                (ZippyChannel::Read1, 1, stream[10..20].to_vec()),
                (ZippyChannel::Read1, 0, stream[..10].to_vec()),
                (ZippyChannel::Read1, 2, stream[20..].to_vec()),
            ],
        });
        let (mut transport, _link) = transport(fw).await;

        let (response, status) = transport.communicate(&[0; 8], 24, None).await.unwrap();
        assert_eq!(&response[..], &stream[..24]);
        assert_eq!(status, Status::SUCCESS);
    }

    #[tokio::test]
    async fn status_arriving_as_separate_message_is_read() {
        let mut fw = firmware();
        fw.replies.push_back(Reply {
            announced: 4,
            fragments: vec![(ZippyChannel::Read2, 0, vec![31, 0, 0, 0])],
        });
        let (mut transport, link) = transport(fw).await;
        // The status comes as a second announced message.
        let communicate = {
            let link = link.clone();
            async move {
                // Queue the trailer message once the first reply has been acked.
                loop {
                    if !link.writes_to(ZippyChannel::ReadControl).is_empty() {
                        link.emit(ZippyChannel::ReadControl, ControlPacket::new(6).encode().to_vec());
                        link.emit(
                            ZippyChannel::Read1,
                            packet::encode_fragment(0, &status_bytes(&Status::SUCCESS)).to_vec(),
                        );
                        break;
                    }
                    tokio::task::yield_now().await;
                }
            }
        };
        let (result, ()) = tokio::join!(transport.communicate(&[0; 8], 4, None), communicate);
        let (response, status) = result.unwrap();
        assert_eq!(&response[..], &[31, 0, 0, 0]);
        assert_eq!(status, Status::SUCCESS);
        assert_eq!(link.writes_to(ZippyChannel::ReadControl).len(), 2);
    }

    #[tokio::test]
    async fn nack_fails_and_releases_lock() {
        let mut fw = firmware();
        fw.write_ack = 0;
        let (mut transport, link) = transport(fw).await;

        let result = transport.communicate(&[0; 8], 0, None).await;
        assert!(matches!(result, Err(TransportError::ProtocolNack { ack: 0 })));
        let locks = link.writes_to(ZippyChannel::Lock);
        assert_eq!(
            LockPacket::decode(locks.last().unwrap()).unwrap(),
            LockPacket::new(APP, false)
        );
    }

    #[tokio::test]
    async fn bad_fragment_size_is_nacked() {
        let mut fw = firmware();
        fw.replies.push_back(Reply {
            announced: 10,
            fragments: vec![(ZippyChannel::Read1, 0, vec![0; 12])],
        });
        let (mut transport, link) = transport(fw).await;

        let result = transport.communicate(&[0; 8], 4, None).await;
        assert!(matches!(result, Err(TransportError::Reassembly(_))));
        assert_eq!(
            link.writes_to(ZippyChannel::ReadControl),
            vec![vec![packet::ACK_FAILED]]
        );
    }

    #[tokio::test]
    async fn reply_with_more_fragments_than_queue_capacity_is_complete() {
        let stream = response_with_status(0..94, &Status::SUCCESS);
        assert!(stream.len() > config().notification_capacity);
        let mut fw = firmware();
        fw.replies.push_back(Reply {
            announced: stream.len() as u16,
            fragments: stream
                .iter()
                .enumerate()
                .map(|(id, byte)| (ZippyChannel::Read1, id as u8, vec![*byte]))
                .collect(),
        });
        let (mut transport, link) = transport(fw).await;

        let (response, status) = transport.communicate(&[0; 8], 94, None).await.unwrap();
        assert_eq!(&response[..], &stream[..94]);
        assert_eq!(status, Status::SUCCESS);
        assert_eq!(link.writes_to(ZippyChannel::ReadControl), vec![vec![packet::ACK_OK]]);
    }

    #[tokio::test(start_paused = true)]
    async fn contended_lock_times_out() {
        let mut fw = firmware();
        fw.contended = true;
        let (mut transport, link) = transport(fw).await;

        let result = transport.communicate(&[0; 8], 0, None).await;
        assert!(matches!(result, Err(TransportError::LockTimeout(_))));
        // Requests were repeated while waiting.
        assert!(link.writes_to(ZippyChannel::Lock).len() > 2);
        assert!(link.writes_to(ZippyChannel::Write1).is_empty());
    }

    #[tokio::test]
    async fn bulk_transfer_is_unsupported() {
        let (mut transport, link) = transport(firmware()).await;

        let result = transport.communicate(&[0; 8], 0, Some(&[1, 2, 3])).await;
        assert!(matches!(result, Err(TransportError::Unsupported(_))));
        assert!(matches!(
            transport.send(&[1], true).await,
            Err(TransportError::Unsupported(_))
        ));
        assert!(link.writes().is_empty());
    }

    #[tokio::test]
    async fn communicate_before_acquire_fails() {
        let mut transport = ZippyTransport::with_config(FakeLink::new(firmware()), config());
        let result = transport.communicate(&[0; 8], 0, None).await;
        assert!(matches!(result, Err(TransportError::NotAcquired)));
    }

    #[tokio::test]
    async fn reset_discards_stale_notifications() {
        let (mut transport, link) = transport(firmware()).await;
        link.emit(ZippyChannel::ReadControl, ControlPacket::new(4).encode().to_vec());
        link.emit(ZippyChannel::Read1, vec![0, 1, 2, 3, 4]);
        // Let the router deliver.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        transport.reset().await.unwrap();
        let inboxes = ZippyTransport::<FakeLink>::inboxes(&mut transport.connected).unwrap();
        assert!(inboxes.read_control.try_recv().is_err());
        assert!(inboxes.read_1.try_recv().is_err());
    }
}
