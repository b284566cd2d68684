//! Host-side protocol engine for the band wearable.
//!
//! # Crate Structure
//!
//! - [`frame`]: command and status packet codecs, binary field layouts
//! - [`registry`]: the built-in command catalog and lookup by name or code
//! - [`transport`]: USB, Bluetooth RFCOMM, BLE (Zippy) and mock transports
//! - [`session`]: acquisition, device family detection and `execute`
//!
//! Hardware transports sit behind the `usb`, `classic` and `ble` features.

/// Re-export frame types.
pub mod frame {
    pub use bandwire_frame::*;
}

/// Re-export registry types.
pub mod registry {
    pub use bandwire_registry::*;
}

/// Re-export transport types.
pub mod transport {
    pub use bandwire_transport::*;
}

/// Re-export session types.
pub mod session {
    pub use bandwire_session::*;
}

pub use bandwire_frame::{Arguments, Status, Value};
pub use bandwire_session::{DeviceFamily, Response, Session, SessionConfig, SessionError};
