use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use super::ZippyChannel;
use crate::error::Result;

/// The host BLE stack's view of one device's Zippy service.
///
/// Service discovery, characteristic binding and subscription are the
/// link's job; the transport only addresses characteristics by
/// [`ZippyChannel`].
#[async_trait]
pub trait GattLink: Send {
    /// Identifies the device to connect to.
    type Target: Clone + fmt::Debug + Send + Sync;

    /// Connect, discover the Zippy service and subscribe to its notifying
    /// characteristics.
    async fn connect(&mut self, target: &Self::Target) -> Result<()>;

    /// Write a characteristic, waiting for the write to complete.
    async fn write(&mut self, channel: ZippyChannel, data: &[u8]) -> Result<()>;

    /// Read a characteristic's current value.
    async fn read(&mut self, channel: ZippyChannel) -> Result<Bytes>;

    /// Notifications from all subscribed characteristics, in arrival order.
    async fn notifications(&mut self) -> Result<BoxStream<'static, (ZippyChannel, Bytes)>>;
}
