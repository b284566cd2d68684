use std::time::Duration;

/// Errors that can occur in transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// An I/O error occurred on the underlying socket or device handle.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No USB device matched the acquisition parameters.
    #[error("no USB device {vendor_id:04x}:{product_id:04x}{}", .serial.as_deref().map(|s| format!(" with serial {s}")).unwrap_or_default())]
    DeviceNotFound {
        vendor_id: u16,
        product_id: u16,
        serial: Option<String>,
    },

    /// A USB transfer failed.
    #[error("USB transfer failed: {0}")]
    Usb(String),

    /// The BLE stack reported an error.
    #[error("BLE error: {0}")]
    Ble(String),

    /// A packet or status trailer could not be decoded.
    #[error("framing error: {0}")]
    Framing(#[from] bandwire_frame::FrameError),

    /// The device acknowledged a Zippy message with a failure flag.
    #[error("device rejected message (ack {ack:#04x})")]
    ProtocolNack { ack: u8 },

    /// Zippy control traffic did not have the expected shape.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// Lock ownership was not confirmed in time.
    #[error("lock not confirmed within {0:?}")]
    LockTimeout(Duration),

    /// Fragment sizes did not add up to the announced message length.
    #[error("reassembly failed: {0}")]
    Reassembly(String),

    /// The device did not answer in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The transport cannot perform the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The transport has not been acquired.
    #[error("transport not acquired")]
    NotAcquired,

    /// A payload exceeds what the transport's framing can carry.
    #[error("packet too large ({size} bytes, max {max})")]
    PacketTooLarge { size: usize, max: usize },

    /// The connection closed underneath the transport.
    #[error("disconnected: {0}")]
    Disconnected(String),
}

pub type Result<T> = std::result::Result<T, TransportError>;
