//! Packet framing for the band command protocol.
//!
//! Every exchange with the device is a command packet followed by an optional
//! bulk transfer, answered by a response payload and a 6-byte status trailer:
//! - Command packet: magic `0x2EF9`, code byte, facility, 4-byte LE data length,
//!   inline argument bytes
//! - Status packet: magic `0xA6FE`, 2-byte code, packed facility/severity word
//!
//! This crate does no I/O. It turns [`Command`] descriptors plus caller
//! [`Arguments`] into bytes, and bytes back into [`Status`] and [`Value`]s.

pub mod command;
pub mod error;
pub mod facility;
pub mod layout;
pub mod status;
mod status_catalog;

pub use command::{
    decode_command_packet, Arguments, BuiltCommand, Command, CommandPacket, ResponseLayout,
    COMMAND_HEADER_SIZE, COMMAND_MAGIC, DATA_LENGTH_ARGUMENT,
};
pub use error::{FrameError, Result};
pub use facility::{Facility, FacilityRange};
pub use layout::{fields_sizeof, Field, Fields, Value};
pub use status::{
    decode_status, encode_status, status_bytes, Severity, Status, STATUS_MAGIC, STATUS_SIZE,
};
