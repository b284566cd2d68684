//! [`GattLink`] over the host BLE stack via btleplug.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use btleplug::api::{Central, Characteristic, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Adapter, Manager, Peripheral};
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use tracing::{debug, info};

use super::{packet, GattLink, ZippyChannel};
use crate::error::{Result, TransportError};

fn ble(context: &str, err: btleplug::Error) -> TransportError {
    TransportError::Ble(format!("{context}: {err}"))
}

/// A device to connect to, by address (`AA:BB:CC:DD:EE:FF`) or platform
/// peripheral id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtleTarget {
    pub id: String,
    /// How long to scan before giving up on an unknown peripheral.
    pub scan_time: Duration,
}

impl BtleTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scan_time: Duration::from_secs(5),
        }
    }
}

#[derive(Default)]
pub struct BtleLink {
    peripheral: Option<Peripheral>,
    characteristics: HashMap<ZippyChannel, Characteristic>,
}

impl std::fmt::Debug for BtleLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BtleLink")
            .field("connected", &self.peripheral.is_some())
            .field("characteristics", &self.characteristics.len())
            .finish()
    }
}

impl BtleLink {
    pub fn new() -> Self {
        Self::default()
    }

    async fn adapter() -> Result<Adapter> {
        let manager = Manager::new().await.map_err(|e| ble("BLE manager", e))?;
        manager
            .adapters()
            .await
            .map_err(|e| ble("list adapters", e))?
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::Ble("no BLE adapter available".into()))
    }

    async fn find(adapter: &Adapter, target: &BtleTarget) -> Result<Option<Peripheral>> {
        let wanted = target.id.to_ascii_uppercase();
        for peripheral in adapter.peripherals().await.map_err(|e| ble("list peripherals", e))? {
            if peripheral.address().to_string().to_ascii_uppercase() == wanted
                || peripheral.id().to_string().to_ascii_uppercase() == wanted
            {
                return Ok(Some(peripheral));
            }
        }
        Ok(None)
    }

    fn characteristic(&self, channel: ZippyChannel) -> Result<(&Peripheral, &Characteristic)> {
        let peripheral = self.peripheral.as_ref().ok_or(TransportError::NotAcquired)?;
        let characteristic = self.characteristics.get(&channel).ok_or_else(|| {
            TransportError::Ble(format!("characteristic {channel} not present on device"))
        })?;
        Ok((peripheral, characteristic))
    }
}

#[async_trait]
impl GattLink for BtleLink {
    type Target = BtleTarget;

    async fn connect(&mut self, target: &BtleTarget) -> Result<()> {
        self.peripheral = None;
        self.characteristics.clear();

        let adapter = Self::adapter().await?;
        let peripheral = match Self::find(&adapter, target).await? {
            Some(peripheral) => peripheral,
            None => {
                debug!(id = %target.id, "peripheral not cached, scanning");
                adapter
                    .start_scan(ScanFilter {
                        services: vec![packet::SERVICE],
                    })
                    .await
                    .map_err(|e| ble("start scan", e))?;
                tokio::time::sleep(target.scan_time).await;
                let found = Self::find(&adapter, target).await;
                adapter.stop_scan().await.map_err(|e| ble("stop scan", e))?;
                found?.ok_or_else(|| TransportError::Ble(format!("device {} not found", target.id)))?
            }
        };

        if !peripheral.is_connected().await.map_err(|e| ble("connection state", e))? {
            peripheral.connect().await.map_err(|e| ble("connect", e))?;
        }
        peripheral
            .discover_services()
            .await
            .map_err(|e| ble("discover services", e))?;

        for characteristic in peripheral.characteristics() {
            if characteristic.service_uuid != packet::SERVICE {
                continue;
            }
            if let Some(channel) = ZippyChannel::from_uuid(characteristic.uuid) {
                self.characteristics.insert(channel, characteristic);
            }
        }
        for channel in ZippyChannel::NOTIFYING {
            if let Some(characteristic) = self.characteristics.get(&channel) {
                peripheral
                    .subscribe(characteristic)
                    .await
                    .map_err(|e| ble("subscribe", e))?;
            }
        }

        info!(
            id = %target.id,
            characteristics = self.characteristics.len(),
            "zippy service bound"
        );
        self.peripheral = Some(peripheral);
        Ok(())
    }

    async fn write(&mut self, channel: ZippyChannel, data: &[u8]) -> Result<()> {
        let (peripheral, characteristic) = self.characteristic(channel)?;
        peripheral
            .write(characteristic, data, WriteType::WithResponse)
            .await
            .map_err(|e| ble("write", e))
    }

    async fn read(&mut self, channel: ZippyChannel) -> Result<Bytes> {
        let (peripheral, characteristic) = self.characteristic(channel)?;
        let value = peripheral.read(characteristic).await.map_err(|e| ble("read", e))?;
        Ok(Bytes::from(value))
    }

    async fn notifications(&mut self) -> Result<BoxStream<'static, (ZippyChannel, Bytes)>> {
        let peripheral = self.peripheral.as_ref().ok_or(TransportError::NotAcquired)?;
        let stream = peripheral
            .notifications()
            .await
            .map_err(|e| ble("notifications", e))?;
        Ok(stream
            .filter_map(|n| async move {
                ZippyChannel::from_uuid(n.uuid).map(|channel| (channel, Bytes::from(n.value)))
            })
            .boxed())
    }
}
