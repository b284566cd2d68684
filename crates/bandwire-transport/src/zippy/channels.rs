use std::fmt;

use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use super::packet;

/// The Zippy GATT characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZippyChannel {
    /// Fragment notifications, device to host.
    Read1,
    Read2,
    /// Incoming message announcements; the host writes its ack here.
    ReadControl,
    ReadBuffer,
    /// Fragment writes, host to device.
    Write1,
    Write2,
    /// Outgoing message announcements; the device notifies its ack here.
    WriteControl,
    WriteBuffer,
    MaxAligned,
    Error,
    Lock,
}

impl ZippyChannel {
    pub const ALL: [Self; 11] = [
        Self::Read1,
        Self::Read2,
        Self::ReadControl,
        Self::ReadBuffer,
        Self::Write1,
        Self::Write2,
        Self::WriteControl,
        Self::WriteBuffer,
        Self::MaxAligned,
        Self::Error,
        Self::Lock,
    ];

    /// Characteristics the host subscribes to.
    pub const NOTIFYING: [Self; 6] = [
        Self::Read1,
        Self::Read2,
        Self::ReadControl,
        Self::WriteControl,
        Self::Error,
        Self::Lock,
    ];

    pub fn uuid(self) -> Uuid {
        match self {
            Self::Read1 => packet::READ_1,
            Self::Read2 => packet::READ_2,
            Self::ReadControl => packet::READ_CONTROL,
            Self::ReadBuffer => packet::READ_BUFFER,
            Self::Write1 => packet::WRITE_1,
            Self::Write2 => packet::WRITE_2,
            Self::WriteControl => packet::WRITE_CONTROL,
            Self::WriteBuffer => packet::WRITE_BUFFER,
            Self::MaxAligned => packet::MAX_ALIGNED,
            Self::Error => packet::ERROR,
            Self::Lock => packet::LOCK,
        }
    }

    pub fn from_uuid(uuid: Uuid) -> Option<Self> {
        Self::ALL.into_iter().find(|channel| channel.uuid() == uuid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read1 => "read-1",
            Self::Read2 => "read-2",
            Self::ReadControl => "read-control",
            Self::ReadBuffer => "read-buffer",
            Self::Write1 => "write-1",
            Self::Write2 => "write-2",
            Self::WriteControl => "write-control",
            Self::WriteBuffer => "write-buffer",
            Self::MaxAligned => "max-aligned",
            Self::Error => "error",
            Self::Lock => "lock",
        }
    }
}

impl fmt::Display for ZippyChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-characteristic notification queues, in arrival order.
#[derive(Debug)]
pub(crate) struct Inboxes {
    pub lock: mpsc::Receiver<Bytes>,
    pub write_control: mpsc::Receiver<Bytes>,
    pub read_control: mpsc::Receiver<Bytes>,
    pub read_1: mpsc::Receiver<Bytes>,
    pub read_2: mpsc::Receiver<Bytes>,
}

impl Inboxes {
    /// Discard everything queued. Returns the number of dropped notifications.
    pub fn drain(&mut self) -> usize {
        fn drain_one(rx: &mut mpsc::Receiver<Bytes>) -> usize {
            let mut n = 0;
            while rx.try_recv().is_ok() {
                n += 1;
            }
            n
        }

        drain_one(&mut self.lock)
            + drain_one(&mut self.write_control)
            + drain_one(&mut self.read_control)
            + drain_one(&mut self.read_1)
            + drain_one(&mut self.read_2)
    }
}

struct Outboxes {
    lock: mpsc::Sender<Bytes>,
    write_control: mpsc::Sender<Bytes>,
    read_control: mpsc::Sender<Bytes>,
    read_1: mpsc::Sender<Bytes>,
    read_2: mpsc::Sender<Bytes>,
}

impl Outboxes {
    /// Queue `data` on its channel, waiting while the queue is full.
    async fn route(&self, channel: ZippyChannel, data: Bytes) {
        let tx = match channel {
            ZippyChannel::Lock => &self.lock,
            ZippyChannel::WriteControl => &self.write_control,
            ZippyChannel::ReadControl => &self.read_control,
            ZippyChannel::Read1 => &self.read_1,
            ZippyChannel::Read2 => &self.read_2,
            ZippyChannel::Error => {
                warn!(payload = %hex::encode(&data), "zippy error notification");
                return;
            }
            other => {
                debug!(channel = %other, len = data.len(), "ignoring notification");
                return;
            }
        };
        trace!(%channel, len = data.len(), "notification");
        if tx.send(data).await.is_err() {
            debug!(%channel, "notification queue closed");
        }
    }
}

/// Background task feeding [`Inboxes`]. Stops when dropped.
#[derive(Debug)]
pub(crate) struct Router {
    cancel: CancellationToken,
}

impl Drop for Router {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start demultiplexing `notifications` into bounded per-channel queues.
///
/// A full queue holds back the stream instead of dropping notifications.
/// Must be called from within a tokio runtime.
pub(crate) fn spawn_router(
    mut notifications: BoxStream<'static, (ZippyChannel, Bytes)>,
    capacity: usize,
) -> (Router, Inboxes) {
    let capacity = capacity.max(1);
    let (lock_tx, lock) = mpsc::channel(capacity);
    let (write_control_tx, write_control) = mpsc::channel(capacity);
    let (read_control_tx, read_control) = mpsc::channel(capacity);
    let (read_1_tx, read_1) = mpsc::channel(capacity);
    let (read_2_tx, read_2) = mpsc::channel(capacity);

    let outboxes = Outboxes {
        lock: lock_tx,
        write_control: write_control_tx,
        read_control: read_control_tx,
        read_1: read_1_tx,
        read_2: read_2_tx,
    };

    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                next = notifications.next() => match next {
                    Some((channel, data)) => tokio::select! {
                        _ = token.cancelled() => break,
                        _ = outboxes.route(channel, data) => {}
                    },
                    None => {
                        debug!("notification stream ended");
                        break;
                    }
                },
            }
        }
    });

    let inboxes = Inboxes {
        lock,
        write_control,
        read_control,
        read_1,
        read_2,
    };
    (Router { cancel }, inboxes)
}

#[cfg(test)]
mod tests {
    use futures::stream;

    use super::*;

    #[test]
    fn uuid_mapping_is_bijective() {
        for channel in ZippyChannel::ALL {
            assert_eq!(ZippyChannel::from_uuid(channel.uuid()), Some(channel));
        }
        assert_eq!(ZippyChannel::from_uuid(packet::SERVICE), None);
    }

    #[tokio::test]
    async fn notifications_are_routed_in_order() {
        let items = vec![
            (ZippyChannel::Read1, Bytes::from_static(&[0, 1])),
            (ZippyChannel::Error, Bytes::from_static(&[0xEE])),
            (ZippyChannel::Read1, Bytes::from_static(&[1, 2])),
            (ZippyChannel::Lock, Bytes::from_static(&[7])),
        ];
        let (_router, mut inboxes) = spawn_router(stream::iter(items).boxed(), 8);

        assert_eq!(&inboxes.read_1.recv().await.unwrap()[..], &[0, 1]);
        assert_eq!(&inboxes.read_1.recv().await.unwrap()[..], &[1, 2]);
        assert_eq!(&inboxes.lock.recv().await.unwrap()[..], &[7]);
        // The stream ended, so every queue closes once empty.
        assert!(inboxes.read_2.recv().await.is_none());
    }

    #[tokio::test]
    async fn drain_discards_queued_notifications() {
        let items = vec![
            (ZippyChannel::ReadControl, Bytes::from_static(&[0xE0, 1, 0])),
            (ZippyChannel::Read2, Bytes::from_static(&[0, 9])),
            (ZippyChannel::Read2, Bytes::from_static(&[1, 9])),
        ];
        let (_router, mut inboxes) = spawn_router(stream::iter(items).boxed(), 8);
        // The router runs to the end of the stream while this task waits.
        assert_eq!(&inboxes.read_2.recv().await.unwrap()[..], &[0, 9]);
        assert_eq!(inboxes.drain(), 2);
        assert_eq!(inboxes.drain(), 0);
    }

    #[tokio::test]
    async fn full_queue_holds_back_the_stream() {
        let items: Vec<_> = (0..10u8)
            .map(|i| (ZippyChannel::Read1, Bytes::from(vec![i])))
            .collect();
        let (_router, mut inboxes) = spawn_router(stream::iter(items).boxed(), 2);

        for i in 0..10u8 {
            assert_eq!(&inboxes.read_1.recv().await.unwrap()[..], &[i]);
        }
        assert!(inboxes.read_1.recv().await.is_none());
    }

    #[tokio::test]
    async fn dropping_the_router_unblocks_a_full_queue() {
        let items: Vec<_> = (0..4u8)
            .map(|i| (ZippyChannel::Read2, Bytes::from(vec![i])))
            .collect();
        let (router, mut inboxes) = spawn_router(stream::iter(items).boxed(), 1);

        assert_eq!(&inboxes.read_2.recv().await.unwrap()[..], &[0]);
        drop(router);
        // At most the one item already queued or in flight remains.
        let mut rest = 0;
        while inboxes.read_2.recv().await.is_some() {
            rest += 1;
        }
        assert!(rest <= 2);
    }
}
