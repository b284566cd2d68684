//! Byte-stream transports for the band protocol.
//!
//! Every transport implements [`Transport`], which presents the device as an
//! ordered stream of command packets, transfers, responses and status
//! trailers:
//! - [`MockTransport`] for engine tests without hardware
//! - USB bulk endpoints (`usb` feature)
//! - Bluetooth Classic RFCOMM, length-prefixed packets
//! - BLE through the Zippy fragment/lock protocol
//!
//! The session layer only ever talks to the trait.

pub mod classic;
pub mod error;
pub mod mock;
mod packets;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;
pub mod zippy;

pub use classic::{ClassicConfig, ClassicParams, ClassicTransport, RfcommConnector};
pub use error::{Result, TransportError};
pub use mock::{MockLog, MockTransport};
pub use traits::{send_transfer, Transport};
#[cfg(feature = "usb")]
pub use usb::{UsbConfig, UsbParams, UsbTransport};
pub use zippy::{GattLink, ZippyChannel, ZippyConfig, ZippyTransport};

#[cfg(all(target_os = "linux", feature = "classic"))]
pub use classic::BluerConnector;
#[cfg(feature = "ble")]
pub use zippy::btle::{BtleLink, BtleTarget};
