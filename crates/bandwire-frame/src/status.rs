//! Status trailer codec.
//!
//! Every response ends with a 6-byte status packet. The status is a value, not
//! an error: device-reported failures are returned to the caller as data.

use std::fmt;

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::facility::Facility;
use crate::status_catalog;

/// Magic number opening every status packet.
pub const STATUS_MAGIC: u16 = 0xA6FE;

/// Status packet size: magic (2) + code (2) + packed field (2).
pub const STATUS_SIZE: usize = 6;

const FACILITY_MASK: u16 = 0x07FF;
const RESERVED_SHIFT: u16 = 11;
const RESERVED_MASK: u16 = 0x0F;
const SEVERITY_SHIFT: u16 = 15;
const CUSTOMER_BIT: u8 = 0b0100;

/// Status severity (bit 15 of the packed field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Null = 0,
    Error = 1,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Error => "error",
        }
    }
}

/// A decoded device status.
///
/// Unknown `(customer, severity, facility, code)` combinations are still
/// valid values; [`Status::name`] returns `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    reserved: u8,
    severity: Severity,
    facility: Facility,
    code: u16,
}

impl Status {
    /// The generic success status.
    pub const SUCCESS: Status = Status {
        reserved: 0,
        severity: Severity::Null,
        facility: Facility::NULL,
        code: 0,
    };

    /// Build a status from its catalog key.
    pub const fn new(customer: bool, severity: Severity, facility: Facility, code: u16) -> Self {
        Self {
            reserved: if customer { CUSTOMER_BIT } else { 0 },
            severity,
            facility,
            code,
        }
    }

    /// Build a status from raw packed-field parts. `reserved` is truncated to 4 bits.
    pub const fn from_parts(reserved: u8, severity: Severity, facility: Facility, code: u16) -> Self {
        Self {
            reserved: reserved & RESERVED_MASK as u8,
            severity,
            facility,
            code,
        }
    }

    /// Look up a catalogued status by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        status_catalog::key_of(name)
            .map(|(customer, severity, facility, code)| Self::new(customer, severity, facility, code))
    }

    pub fn customer(&self) -> bool {
        self.reserved & CUSTOMER_BIT != 0
    }

    pub fn reserved(&self) -> u8 {
        self.reserved
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// Catalog name, or `None` for an unrecognized status.
    pub fn name(&self) -> Option<&'static str> {
        status_catalog::name_of(self.customer(), self.severity, self.facility, self.code)
    }

    pub fn is_recognized(&self) -> bool {
        self.name().is_some()
    }

    /// True when the severity bit is set.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// True for anything other than a zero code with null severity.
    ///
    /// Responses carrying a failure status are returned raw; their payload
    /// is not parsed against the success layout.
    pub fn is_failure(&self) -> bool {
        self.code != 0 || self.is_error()
    }

    /// The packed `facility | reserved << 11 | severity << 15` word.
    pub fn packed(&self) -> u16 {
        (self.facility.value() as u16 & FACILITY_MASK)
            | ((self.reserved as u16 & RESERVED_MASK) << RESERVED_SHIFT)
            | ((self.severity as u16) << SEVERITY_SHIFT)
    }

    /// Decode the packed field and code word.
    pub fn from_packed(code: u16, packed: u16) -> Result<Self> {
        let facility = packed & FACILITY_MASK;
        let facility = u8::try_from(facility).map_err(|_| FrameError::FacilityOutOfRange(facility))?;
        let reserved = ((packed >> RESERVED_SHIFT) & RESERVED_MASK) as u8;
        let severity = if packed >> SEVERITY_SHIFT == 1 {
            Severity::Error
        } else {
            Severity::Null
        };
        Ok(Self {
            reserved,
            severity,
            facility: Facility::new(facility),
            code,
        })
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "Unrecognized(customer={}, severity={}, facility={}, code={})",
                self.customer(),
                self.severity.as_str(),
                self.facility,
                self.code
            ),
        }
    }
}

/// Decode a status packet.
///
/// Wire format:
/// ```text
/// ┌──────────────┬───────────┬─────────────────────────────────────┐
/// │ Magic (2B)   │ Code      │ Packed (2B LE)                      │
/// │ 0xFE 0xA6    │ (2B LE)   │ facility:11 | reserved:4 | sev:1    │
/// └──────────────┴───────────┴─────────────────────────────────────┘
/// ```
///
/// Only the first [`STATUS_SIZE`] bytes are read.
pub fn decode_status(src: &[u8]) -> Result<Status> {
    if src.len() < STATUS_SIZE {
        return Err(FrameError::Truncated {
            needed: STATUS_SIZE,
            available: src.len(),
        });
    }

    let magic = u16::from_le_bytes([src[0], src[1]]);
    if magic != STATUS_MAGIC {
        return Err(FrameError::BadMagic {
            expected: STATUS_MAGIC,
            found: magic,
        });
    }

    let code = u16::from_le_bytes([src[2], src[3]]);
    let packed = u16::from_le_bytes([src[4], src[5]]);
    Status::from_packed(code, packed)
}

/// Encode a status packet into `dst`.
pub fn encode_status(status: &Status, dst: &mut BytesMut) {
    dst.reserve(STATUS_SIZE);
    dst.put_u16_le(STATUS_MAGIC);
    dst.put_u16_le(status.code);
    dst.put_u16_le(status.packed());
}

/// Encode a status packet into a fresh 6-byte array.
pub fn status_bytes(status: &Status) -> [u8; STATUS_SIZE] {
    let code = status.code.to_le_bytes();
    let packed = status.packed().to_le_bytes();
    let magic = STATUS_MAGIC.to_le_bytes();
    [magic[0], magic[1], code[0], code[1], packed[0], packed[1]]
}

/// Number of statuses in the built-in catalog.
pub fn catalog_len() -> usize {
    status_catalog::len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_packed_customer_error() {
        // facility 0xCA, reserved 0b0100, severity 1, code 19
        let packed: u16 = 0xCA | (0b0100 << 11) | (1 << 15);
        let mut buf = BytesMut::new();
        buf.put_u16_le(STATUS_MAGIC);
        buf.put_u16_le(19);
        buf.put_u16_le(packed);

        let status = decode_status(&buf).unwrap();
        assert!(status.customer());
        assert_eq!(status.severity(), Severity::Error);
        assert_eq!(status.facility(), Facility::MODULE_SYSTEM_SETTINGS);
        assert_eq!(status.code(), 19);
        assert!(status.is_failure());
    }

    #[test]
    fn encode_decode_roundtrip() {
        let status = Status::from_parts(0b1010, Severity::Error, Facility::new(0x6A), 0x1234);
        let mut buf = BytesMut::new();
        encode_status(&status, &mut buf);
        assert_eq!(buf.len(), STATUS_SIZE);
        assert_eq!(&buf[..], &status_bytes(&status));
        assert_eq!(decode_status(&buf).unwrap(), status);
    }

    #[test]
    fn success_wire_bytes() {
        assert_eq!(status_bytes(&Status::SUCCESS), [0xFE, 0xA6, 0, 0, 0, 0]);
        assert_eq!(Status::SUCCESS.name(), Some("Success"));
        assert!(!Status::SUCCESS.is_failure());
    }

    #[test]
    fn bad_magic_is_rejected() {
        let result = decode_status(&[0xF9, 0x2E, 0, 0, 0, 0]);
        assert!(matches!(
            result,
            Err(FrameError::BadMagic {
                expected: STATUS_MAGIC,
                found: 0x2EF9
            })
        ));
    }

    #[test]
    fn short_buffer_is_truncated() {
        let result = decode_status(&[0xFE, 0xA6, 0]);
        assert!(matches!(
            result,
            Err(FrameError::Truncated {
                needed: 6,
                available: 3
            })
        ));
    }

    #[test]
    fn facility_above_byte_range_is_rejected() {
        let result = decode_status(&[0xFE, 0xA6, 0, 0, 0x00, 0x01]);
        assert!(matches!(result, Err(FrameError::FacilityOutOfRange(0x100))));
    }

    #[test]
    fn unrecognized_status_is_a_value() {
        let status = Status::new(true, Severity::Error, Facility::MODULE_SYSTEM_SETTINGS, 19);
        assert!(!status.is_recognized());
        assert_eq!(
            status.to_string(),
            "Unrecognized(customer=true, severity=error, facility=ModuleSystemSettings, code=19)"
        );
    }

    #[test]
    fn nonzero_code_is_failure_without_error_bit() {
        let status = Status::from_name("AnalogMgrWriteSuccessful").unwrap();
        assert_eq!(status.severity(), Severity::Null);
        assert_ne!(status.code(), 0);
        assert!(!status.is_error());
        assert!(status.is_failure());
    }

    #[test]
    fn catalogued_status_by_name() {
        let status = Status::from_name("SystemSettingsOperationBusy").unwrap();
        assert!(status.customer());
        assert_eq!(status.facility(), Facility::MODULE_SYSTEM_SETTINGS);
        assert_eq!(status.code(), 2);
        assert_eq!(status.to_string(), "SystemSettingsOperationBusy");
    }
}
