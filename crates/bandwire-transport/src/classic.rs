//! Bluetooth Classic RFCOMM transport.
//!
//! The socket is a plain byte stream, so command packets carry a one-byte
//! length prefix. Bulk transfer bytes go out unframed.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Largest command packet a length prefix can describe.
pub const MAX_PREFIXED_PACKET: usize = u8::MAX as usize;

/// Default RFCOMM channel of the device's protocol service.
pub const DEFAULT_CHANNEL: u8 = 4;

/// Where to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicParams {
    /// Device address, `AA:BB:CC:DD:EE:FF`.
    pub address: String,
    pub channel: u8,
}

impl ClassicParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            channel: DEFAULT_CHANNEL,
        }
    }

    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClassicConfig {
    /// Bound on each socket read and write.
    pub timeout: Duration,
}

impl Default for ClassicConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

/// Opens RFCOMM streams. Split out so the host Bluetooth stack can be swapped.
#[async_trait]
pub trait RfcommConnector: Send {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    async fn connect(&mut self, params: &ClassicParams) -> Result<Self::Stream>;
}

/// Transport over an RFCOMM stream.
pub struct ClassicTransport<C: RfcommConnector> {
    connector: C,
    config: ClassicConfig,
    stream: Option<C::Stream>,
}

impl<C: RfcommConnector> ClassicTransport<C> {
    pub fn new(connector: C) -> Self {
        Self::with_config(connector, ClassicConfig::default())
    }

    pub fn with_config(connector: C, config: ClassicConfig) -> Self {
        Self {
            connector,
            config,
            stream: None,
        }
    }

    fn stream(&mut self) -> Result<&mut C::Stream> {
        self.stream.as_mut().ok_or(TransportError::NotAcquired)
    }
}

impl<C: RfcommConnector> std::fmt::Debug for ClassicTransport<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassicTransport")
            .field("config", &self.config)
            .field("connected", &self.stream.is_some())
            .finish()
    }
}

#[async_trait]
impl<C> Transport for ClassicTransport<C>
where
    C: RfcommConnector,
    C::Stream: 'static,
{
    type Params = ClassicParams;

    async fn acquire(&mut self, params: &ClassicParams) -> Result<()> {
        self.stream = None;
        let stream = timeout(self.config.timeout, self.connector.connect(params))
            .await
            .map_err(|_| TransportError::Timeout(self.config.timeout))??;
        self.stream = Some(stream);
        info!(address = %params.address, channel = params.channel, "rfcomm connected");
        Ok(())
    }

    async fn send(&mut self, data: &[u8], bulk: bool) -> Result<usize> {
        let limit = self.config.timeout;
        let framed;
        let out = if bulk {
            data
        } else {
            let len = u8::try_from(data.len()).map_err(|_| TransportError::PacketTooLarge {
                size: data.len(),
                max: MAX_PREFIXED_PACKET,
            })?;
            let mut buf = Vec::with_capacity(data.len() + 1);
            buf.push(len);
            buf.extend_from_slice(data);
            framed = buf;
            &framed[..]
        };

        let stream = self.stream()?;
        timeout(limit, async {
            stream.write_all(out).await?;
            stream.flush().await
        })
        .await
        .map_err(|_| TransportError::Timeout(limit))??;
        debug!(len = data.len(), bulk, "rfcomm write");
        Ok(data.len())
    }

    async fn read_some(&mut self, max: usize) -> Result<Bytes> {
        let limit = self.config.timeout;
        let stream = self.stream()?;
        let mut buf = vec![0; max];
        let n = timeout(limit, stream.read(&mut buf))
            .await
            .map_err(|_| TransportError::Timeout(limit))??;
        buf.truncate(n);
        Ok(Bytes::from(buf))
    }
}

/// RFCOMM connector backed by BlueZ.
#[cfg(all(target_os = "linux", feature = "classic"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct BluerConnector;

#[cfg(all(target_os = "linux", feature = "classic"))]
#[async_trait]
impl RfcommConnector for BluerConnector {
    type Stream = bluer::rfcomm::Stream;

    async fn connect(&mut self, params: &ClassicParams) -> Result<Self::Stream> {
        use bluer::rfcomm::{SocketAddr, Stream};

        let address: bluer::Address = params
            .address
            .parse()
            .map_err(|e| TransportError::Protocol(format!("bad device address {}: {e}", params.address)))?;
        let stream = Stream::connect(SocketAddr::new(address, params.channel)).await?;
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use bandwire_frame::{status_bytes, Status};
    use tokio::io::DuplexStream;

    use super::*;

    struct DuplexConnector(Option<DuplexStream>);

    #[async_trait]
    impl RfcommConnector for DuplexConnector {
        type Stream = DuplexStream;

        async fn connect(&mut self, _params: &ClassicParams) -> Result<DuplexStream> {
            self.0
                .take()
                .ok_or_else(|| TransportError::Disconnected("already connected".into()))
        }
    }

    async fn connected() -> (ClassicTransport<DuplexConnector>, DuplexStream) {
        let (near, far) = tokio::io::duplex(4096);
        let mut transport = ClassicTransport::new(DuplexConnector(Some(near)));
        transport
            .acquire(&ClassicParams::new("00:11:22:33:44:55"))
            .await
            .unwrap();
        (transport, far)
    }

    #[test]
    fn default_channel_is_four() {
        assert_eq!(ClassicParams::new("00:11:22:33:44:55").channel, 4);
    }

    #[tokio::test]
    async fn send_before_acquire_fails() {
        let mut transport = ClassicTransport::new(DuplexConnector(None));
        assert!(matches!(
            transport.send(&[1], false).await,
            Err(TransportError::NotAcquired)
        ));
    }

    #[tokio::test]
    async fn packets_are_length_prefixed_and_transfers_are_not() {
        let (mut transport, mut far) = connected().await;
        assert_eq!(transport.send(&[0xF9, 0x2E, 0x86, 0x76], false).await.unwrap(), 4);
        assert_eq!(transport.send(&[1, 2, 3], true).await.unwrap(), 3);

        let mut buf = [0; 8];
        far.read_exact(&mut buf).await.unwrap();
        assert_eq!(buf, [4, 0xF9, 0x2E, 0x86, 0x76, 1, 2, 3]);
    }

    #[tokio::test]
    async fn oversized_packet_is_rejected() {
        let (mut transport, _far) = connected().await;
        let result = transport.send(&[0; 256], false).await;
        assert!(matches!(
            result,
            Err(TransportError::PacketTooLarge { size: 256, max: 255 })
        ));
        // Bulk bytes have no prefix, so no limit applies.
        assert_eq!(transport.send(&[0; 256], true).await.unwrap(), 256);
    }

    #[tokio::test]
    async fn communicate_reads_response_then_status() {
        let (mut transport, mut far) = connected().await;
        far.write_all(&[31, 0, 0, 0]).await.unwrap();
        far.write_all(&status_bytes(&Status::SUCCESS)).await.unwrap();

        let (payload, status) = transport.communicate(&[0xAA], 4, None).await.unwrap();
        assert_eq!(&payload[..], &[31, 0, 0, 0]);
        assert_eq!(status, Status::SUCCESS);
    }

    #[tokio::test]
    async fn closed_stream_is_disconnected() {
        let (mut transport, far) = connected().await;
        drop(far);
        let result = transport.read(6).await;
        assert!(matches!(result, Err(TransportError::Disconnected(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_device_times_out() {
        let (mut transport, _far) = connected().await;
        let result = transport.read(6).await;
        assert!(matches!(result, Err(TransportError::Timeout(_))));
    }
}
