/// Errors that can occur while encoding or decoding packets.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A command or status packet did not start with its magic number.
    #[error("bad packet magic (expected {expected:#06X}, found {found:#06X})")]
    BadMagic { expected: u16, found: u16 },

    /// The buffer ended before a complete packet or field was available.
    #[error("truncated packet ({available} bytes available, {needed} needed)")]
    Truncated { needed: usize, available: usize },

    /// A non-constant argument field was not supplied by the caller.
    #[error("command {command}: missing argument {field}")]
    MissingArgument { command: String, field: String },

    /// A transfer was required but no layout, value, or raw bytes were available.
    #[error("command {command}: missing transfer {}", .field.as_deref().unwrap_or("payload"))]
    MissingTransfer {
        command: String,
        field: Option<String>,
    },

    /// No data length could be resolved for the command packet.
    #[error("command {command}: data length could not be resolved")]
    MissingDataLength { command: String },

    /// The caller supplied a value the command does not declare.
    #[error("command {command}: unexpected argument {field}")]
    UnexpectedArgument { command: String, field: String },

    /// A value could not be encoded or decoded with its field descriptor.
    #[error("field {field}: {reason}")]
    Layout { field: String, reason: String },

    /// A status packet carried a facility wider than 8 bits.
    #[error("status facility {0:#X} outside the 8-bit facility space")]
    FacilityOutOfRange(u16),

    /// A payload exceeds what the wire format can carry.
    #[error("payload too large ({size} bytes, max {max})")]
    PacketTooLarge { size: usize, max: usize },
}

impl FrameError {
    pub(crate) fn layout(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Layout {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
