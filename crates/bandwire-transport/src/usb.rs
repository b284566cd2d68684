//! USB bulk transport.
//!
//! The device exposes one interface with a bulk IN/OUT endpoint pair. Every
//! write is split at the OUT endpoint's max packet size; reads are issued in
//! whole max-packet multiples and any surplus is held for the next read.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use nusb::transfer::{Direction, EndpointType, RequestBuffer, TransferError};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::{Result, TransportError};
use crate::packets::{packet_ranges, round_up_to_packet, Surplus};
use crate::traits::Transport;

pub const DEFAULT_VENDOR_ID: u16 = 0x045E;
pub const DEFAULT_PRODUCT_ID: u16 = 0x02D6;

/// Which device to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbParams {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Only open the device with this serial number.
    pub serial: Option<String>,
}

impl Default for UsbParams {
    fn default() -> Self {
        Self {
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            serial: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UsbConfig {
    /// Bound on each bulk transfer.
    pub timeout: Duration,
    pub interface: u8,
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            interface: 0,
        }
    }
}

struct Endpoints {
    interface: nusb::Interface,
    bulk_in: u8,
    bulk_out: u8,
    in_packet: usize,
    out_packet: usize,
}

/// Transport over the device's bulk endpoints.
pub struct UsbTransport {
    config: UsbConfig,
    endpoints: Option<Endpoints>,
    pending: Surplus,
}

impl std::fmt::Debug for UsbTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("UsbTransport");
        s.field("config", &self.config);
        if let Some(ep) = &self.endpoints {
            s.field("bulk_in", &format_args!("{:#04x}", ep.bulk_in))
                .field("bulk_out", &format_args!("{:#04x}", ep.bulk_out));
        }
        s.field("pending", &self.pending.len()).finish()
    }
}

impl Default for UsbTransport {
    fn default() -> Self {
        Self::new(UsbConfig::default())
    }
}

impl UsbTransport {
    pub fn new(config: UsbConfig) -> Self {
        Self {
            config,
            endpoints: None,
            pending: Surplus::default(),
        }
    }

    fn endpoints(&self) -> Result<&Endpoints> {
        self.endpoints.as_ref().ok_or(TransportError::NotAcquired)
    }

    fn open(&self, params: &UsbParams) -> Result<Endpoints> {
        let info = nusb::list_devices()?
            .filter(|d| d.vendor_id() == params.vendor_id && d.product_id() == params.product_id)
            .find(|d| match &params.serial {
                Some(serial) => d.serial_number() == Some(serial.as_str()),
                None => true,
            })
            .ok_or_else(|| TransportError::DeviceNotFound {
                vendor_id: params.vendor_id,
                product_id: params.product_id,
                serial: params.serial.clone(),
            })?;

        let device = info.open()?;
        let config = device
            .active_configuration()
            .map_err(|e| TransportError::Usb(e.to_string()))?;

        let mut bulk_in = None;
        let mut bulk_out = None;
        for alt in config.interface_alt_settings() {
            if alt.interface_number() != self.config.interface || alt.alternate_setting() != 0 {
                continue;
            }
            for endpoint in alt.endpoints() {
                if endpoint.transfer_type() != EndpointType::Bulk {
                    continue;
                }
                let found = (endpoint.address(), endpoint.max_packet_size());
                match endpoint.direction() {
                    Direction::In => bulk_in = bulk_in.or(Some(found)),
                    Direction::Out => bulk_out = bulk_out.or(Some(found)),
                }
            }
        }
        let ((bulk_in, in_packet), (bulk_out, out_packet)) = bulk_in.zip(bulk_out).ok_or_else(|| {
            TransportError::Usb(format!(
                "interface {} has no bulk endpoint pair",
                self.config.interface
            ))
        })?;

        let interface = device.claim_interface(self.config.interface)?;
        info!(
            vendor_id = params.vendor_id,
            product_id = params.product_id,
            bulk_in,
            bulk_out,
            out_packet,
            "usb device claimed"
        );
        Ok(Endpoints {
            interface,
            bulk_in,
            bulk_out,
            in_packet: in_packet.max(1),
            out_packet: out_packet.max(1),
        })
    }

    fn clear_halts(&self) -> Result<()> {
        let ep = self.endpoints()?;
        ep.interface
            .clear_halt(ep.bulk_in)
            .map_err(|e| TransportError::Usb(format!("clear halt on {:#04x}: {e}", ep.bulk_in)))?;
        ep.interface
            .clear_halt(ep.bulk_out)
            .map_err(|e| TransportError::Usb(format!("clear halt on {:#04x}: {e}", ep.bulk_out)))?;
        Ok(())
    }

    /// Map a transfer failure, clearing halted endpoints first when the host
    /// and device may have lost frame alignment.
    fn transfer_failed(&mut self, err: TransferError) -> TransportError {
        match err {
            TransferError::Disconnected => {
                self.endpoints = None;
                TransportError::Disconnected("usb device detached".into())
            }
            TransferError::Cancelled => TransportError::Usb(err.to_string()),
            _ => {
                warn!(error = %err, "usb transfer failed, clearing endpoint halts");
                self.pending.clear();
                if let Err(clear) = self.clear_halts() {
                    warn!(error = %clear, "could not clear endpoint halts");
                }
                TransportError::Usb(err.to_string())
            }
        }
    }
}

#[async_trait]
impl Transport for UsbTransport {
    type Params = UsbParams;

    async fn acquire(&mut self, params: &UsbParams) -> Result<()> {
        self.endpoints = None;
        self.pending.clear();
        self.endpoints = Some(self.open(params)?);
        Ok(())
    }

    async fn send(&mut self, data: &[u8], bulk: bool) -> Result<usize> {
        let limit = self.config.timeout;
        let (interface, endpoint, packet) = {
            let ep = self.endpoints()?;
            (ep.interface.clone(), ep.bulk_out, ep.out_packet)
        };

        for range in packet_ranges(data.len(), packet) {
            let chunk = &data[range];
            let completion = timeout(limit, interface.bulk_out(endpoint, chunk.to_vec()))
                .await
                .map_err(|_| TransportError::Timeout(limit))?;
            if let Err(err) = completion.status {
                return Err(self.transfer_failed(err));
            }
            if completion.data.actual_length() != chunk.len() {
                return Err(TransportError::Usb(format!(
                    "short write ({} of {} bytes)",
                    completion.data.actual_length(),
                    chunk.len()
                )));
            }
        }
        debug!(len = data.len(), bulk, "usb write");
        Ok(data.len())
    }

    async fn read_some(&mut self, max: usize) -> Result<Bytes> {
        if !self.pending.is_empty() {
            return Ok(self.pending.take(max));
        }

        let limit = self.config.timeout;
        let (interface, endpoint, packet) = {
            let ep = self.endpoints()?;
            (ep.interface.clone(), ep.bulk_in, ep.in_packet)
        };
        let request = round_up_to_packet(max, packet);

        let completion = timeout(limit, interface.bulk_in(endpoint, RequestBuffer::new(request)))
            .await
            .map_err(|_| TransportError::Timeout(limit))?;
        if let Err(err) = completion.status {
            return Err(self.transfer_failed(err));
        }

        let data = Bytes::from(completion.data);
        if data.is_empty() {
            // Zero-length packet; the stream is still open.
            return Ok(Bytes::new());
        }
        let head = self.pending.split(data, max);
        debug!(len = head.len(), pending = self.pending.len(), "usb read");
        Ok(head)
    }

    async fn read(&mut self, n: usize) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(n);
        while buf.len() < n {
            let chunk = self.read_some(n - buf.len()).await?;
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }

    async fn reset(&mut self) -> Result<()> {
        self.pending.clear();
        self.clear_halts()?;
        debug!("usb endpoints reset");
        Ok(())
    }
}
