//! Zippy GATT identifiers and control-plane packets.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use uuid::Uuid;

use crate::error::{Result, TransportError};

pub const SERVICE: Uuid = Uuid::from_u128(0xa502ca98_2ba5_413c_a4e0_13804e47b38f);
pub const PUSH_SERVICE: Uuid = Uuid::from_u128(0xc742e1a3_6320_5abc_9643_d206c677e580);

pub const READ_1: Uuid = Uuid::from_u128(0x0534594a_a8e7_4b1a_a6b1_cd5243059a55);
pub const READ_2: Uuid = Uuid::from_u128(0x0434594a_a8e7_4b1a_a6b1_cd5243059a54);
pub const READ_CONTROL: Uuid = Uuid::from_u128(0xaf04c4b2_892b_43be_b69c_5d13f2195391);
pub const READ_BUFFER: Uuid = Uuid::from_u128(0x8004c4b2_892b_43be_b69c_5d13f2195380);
pub const WRITE_1: Uuid = Uuid::from_u128(0x0734594a_a8e7_4b1a_a6b1_cd5243059a57);
pub const WRITE_2: Uuid = Uuid::from_u128(0x0634594a_a8e7_4b1a_a6b1_cd5243059a56);
pub const WRITE_CONTROL: Uuid = Uuid::from_u128(0xae04c4b2_892b_43be_b69c_5d13f2195390);
pub const WRITE_BUFFER: Uuid = Uuid::from_u128(0x7f04c4b2_892b_43be_b69c_5d13f2195379);
pub const MAX_ALIGNED: Uuid = Uuid::from_u128(0x4204c4b2_892b_43be_b69c_5d13f2195359);
pub const ERROR: Uuid = Uuid::from_u128(0xd2a1e333_c56c_445c_a24d_4a4440c676f6);
pub const LOCK: Uuid = Uuid::from_u128(0x2f8784ec_6a34_11b6_634d_b7369dce1c55);

/// Leading byte of every control packet.
pub const CONTROL_MARKER: u8 = 0xE0;
pub const CONTROL_PACKET_SIZE: usize = 3;
pub const LOCK_PACKET_SIZE: usize = 20;

/// Acknowledgement byte for an accepted message.
pub const ACK_OK: u8 = 1;
pub const ACK_FAILED: u8 = 0;

/// Lock request or lock state notification.
///
/// The firmware echoes the identifier of whichever application currently
/// holds the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockPacket {
    pub app_id: Uuid,
    pub locked: bool,
}

impl LockPacket {
    pub fn new(app_id: Uuid, locked: bool) -> Self {
        Self { app_id, locked }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(LOCK_PACKET_SIZE);
        buf.put_slice(self.app_id.as_bytes());
        buf.put_u32_le(u32::from(self.locked));
        buf.freeze()
    }

    pub fn decode(mut data: &[u8]) -> Result<Self> {
        if data.len() < LOCK_PACKET_SIZE {
            return Err(TransportError::Protocol(format!(
                "lock packet is {} bytes, expected {LOCK_PACKET_SIZE}",
                data.len()
            )));
        }
        let mut id = [0u8; 16];
        data.copy_to_slice(&mut id);
        let locked = data.get_u32_le() != 0;
        Ok(Self {
            app_id: Uuid::from_bytes(id),
            locked,
        })
    }

    /// True when the lock is held by nobody.
    pub fn is_free(&self) -> bool {
        !self.locked || self.app_id.is_nil()
    }
}

/// Announces the length of the message that follows on the fragment channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPacket {
    pub length: u16,
}

impl ControlPacket {
    pub fn new(length: u16) -> Self {
        Self { length }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(CONTROL_PACKET_SIZE);
        buf.put_u8(CONTROL_MARKER);
        buf.put_u16_le(self.length);
        buf.freeze()
    }

    pub fn decode(mut data: &[u8]) -> Result<Self> {
        if data.len() < CONTROL_PACKET_SIZE {
            return Err(TransportError::Protocol(format!(
                "control packet is {} bytes, expected {CONTROL_PACKET_SIZE}",
                data.len()
            )));
        }
        let marker = data.get_u8();
        if marker != CONTROL_MARKER {
            return Err(TransportError::Protocol(format!(
                "control packet marker {marker:#04x}, expected {CONTROL_MARKER:#04x}"
            )));
        }
        Ok(Self {
            length: data.get_u16_le(),
        })
    }
}

/// Prefix `payload` with its fragment sequence byte.
pub fn encode_fragment(id: u8, payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(payload.len() + 1);
    buf.put_u8(id);
    buf.put_slice(payload);
    buf.freeze()
}

/// Split a fragment notification into its sequence byte and payload.
pub fn decode_fragment(data: &[u8]) -> Result<(u8, Bytes)> {
    match data.split_first() {
        Some((&id, payload)) => Ok((id, Bytes::copy_from_slice(payload))),
        None => Err(TransportError::Protocol("empty fragment notification".into())),
    }
}

/// Decode the little-endian max-aligned characteristic value.
pub fn decode_max_aligned(data: &[u8]) -> Result<usize> {
    if data.is_empty() || data.len() > 4 {
        return Err(TransportError::Protocol(format!(
            "max aligned value is {} bytes",
            data.len()
        )));
    }
    let mut raw = [0u8; 4];
    raw[..data.len()].copy_from_slice(data);
    match u32::from_le_bytes(raw) {
        0 => Err(TransportError::Protocol("max aligned size is zero".into())),
        n => Ok(n as usize),
    }
}
