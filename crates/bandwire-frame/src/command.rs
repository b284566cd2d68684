//! Command descriptors and the command packet codec.

use std::collections::BTreeMap;
use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::{FrameError, Result};
use crate::facility::Facility;
use crate::layout::{fields_sizeof, Field, Fields, Value};

/// Magic number opening every command packet.
pub const COMMAND_MAGIC: u16 = 0x2EF9;

/// Command header: magic (2) + code byte (1) + facility (1) + data length (4).
pub const COMMAND_HEADER_SIZE: usize = 8;

/// Argument name that doubles as the packet's data length when declared.
pub const DATA_LENGTH_ARGUMENT: &str = "DataLength";

const TRANSFERLESS_BIT: u8 = 0x80;
const CODE_MASK: u8 = 0x7F;

/// How a command's response payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLayout {
    /// No layout declared: the payload is returned as raw bytes.
    Unspecified,
    /// No payload; the status is the whole response.
    StatusOnly,
    /// Payload decoded with the given layout.
    Layout(Field),
}

impl ResponseLayout {
    /// Bytes to read before the status trailer.
    ///
    /// Variable-size layouts fall back to `data_length`, following the
    /// firmware's convention of echoing the requested length.
    pub fn response_len(&self, data_length: u32) -> usize {
        match self {
            Self::StatusOnly => 0,
            Self::Layout(field) => field.sizeof().unwrap_or(data_length as usize),
            Self::Unspecified => data_length as usize,
        }
    }
}

/// An immutable command descriptor.
///
/// Descriptors are built in `const` context and live in static tables; the
/// builder methods consume and return the descriptor.
#[derive(Debug, PartialEq, Eq)]
pub struct Command {
    pub facility: Facility,
    pub code: u8,
    pub transferless: bool,
    pub name: Option<&'static str>,
    pub data_length: Option<u32>,
    pub arguments: Fields,
    pub transfer: Option<Fields>,
    pub response: ResponseLayout,
}

impl Command {
    /// A bare descriptor. Panics at compile time in `const` context if `code`
    /// does not fit in 7 bits.
    pub const fn new(facility: Facility, code: u8, transferless: bool) -> Self {
        assert!(code <= CODE_MASK, "command code must fit in 7 bits");
        Self {
            facility,
            code,
            transferless,
            name: None,
            data_length: None,
            arguments: &[],
            transfer: None,
            response: ResponseLayout::Unspecified,
        }
    }

    pub const fn named(self, name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    pub const fn with_data_length(self, data_length: u32) -> Self {
        Self {
            data_length: Some(data_length),
            ..self
        }
    }

    pub const fn with_arguments(self, arguments: Fields) -> Self {
        Self { arguments, ..self }
    }

    pub const fn with_transfer(self, transfer: Fields) -> Self {
        Self {
            transfer: Some(transfer),
            ..self
        }
    }

    pub const fn with_response(self, layout: Field) -> Self {
        Self {
            response: ResponseLayout::Layout(layout),
            ..self
        }
    }

    pub const fn status_only(self) -> Self {
        Self {
            response: ResponseLayout::StatusOnly,
            ..self
        }
    }

    /// `(facility, code, transferless)`, the command's identity on the wire.
    pub const fn triple(&self) -> (Facility, u8, bool) {
        (self.facility, self.code, self.transferless)
    }

    /// The packed code byte: `code | transferless << 7`.
    pub const fn code_byte(&self) -> u8 {
        (self.code & CODE_MASK) | if self.transferless { TRANSFERLESS_BIT } else { 0 }
    }

    /// The first two bytes after the magic, read as a little-endian `u16`.
    pub const fn raw_code(&self) -> u16 {
        u16::from_le_bytes([self.code_byte(), self.facility.value()])
    }

    /// Data length known without any caller input.
    ///
    /// An explicit declaration wins; otherwise a transferless command uses
    /// its fixed response size and a transfer command its fixed transfer size.
    pub const fn declared_data_length(&self) -> Option<u32> {
        if let Some(length) = self.data_length {
            return Some(length);
        }
        let size = if self.transferless {
            match self.response {
                ResponseLayout::Layout(field) => field.sizeof(),
                _ => None,
            }
        } else {
            match self.transfer {
                Some(fields) => fields_sizeof(fields),
                None => None,
            }
        };
        match size {
            Some(size) if size <= u32::MAX as usize => Some(size as u32),
            _ => None,
        }
    }

    fn declares(&self, name: &str) -> bool {
        let in_arguments = self.arguments.iter().any(|(n, _)| *n == name);
        let in_transfer = self
            .transfer
            .is_some_and(|fields| fields.iter().any(|(n, _)| *n == name));
        in_arguments || in_transfer
    }

    /// Build the command packet, expected response length and transfer payload.
    pub fn build(&self, args: &Arguments) -> Result<BuiltCommand> {
        for name in args.values.keys() {
            if !self.declares(name) {
                return Err(FrameError::UnexpectedArgument {
                    command: self.to_string(),
                    field: name.clone(),
                });
            }
        }

        let mut arguments = BytesMut::new();
        for (name, field) in self.arguments.iter() {
            let value = args.values.get(*name);
            if value.is_none() && !field.is_const() {
                return Err(FrameError::MissingArgument {
                    command: self.to_string(),
                    field: name.to_string(),
                });
            }
            field.encode(name, value, &mut arguments)?;
        }

        let transfer = self.build_transfer(args)?;

        let data_length = args
            .data_length
            .or_else(|| self.data_length_argument(args))
            .or_else(|| self.declared_data_length())
            .or_else(|| transfer.as_ref().and_then(|t| u32::try_from(t.len()).ok()))
            .ok_or_else(|| FrameError::MissingDataLength {
                command: self.to_string(),
            })?;

        let response = args.response.unwrap_or(self.response);
        let response_len = response.response_len(data_length);

        let mut packet = BytesMut::with_capacity(COMMAND_HEADER_SIZE + arguments.len());
        packet.put_u16_le(COMMAND_MAGIC);
        packet.put_u8(self.code_byte());
        packet.put_u8(self.facility.value());
        packet.put_u32_le(data_length);
        packet.put_slice(&arguments);

        trace!(
            command = %self,
            data_length,
            response_len,
            transfer_len = transfer.as_ref().map_or(0, Bytes::len),
            "built command packet"
        );

        Ok(BuiltCommand {
            packet: packet.freeze(),
            data_length,
            response_len,
            transfer: transfer.filter(|t| !t.is_empty()),
        })
    }

    fn build_transfer(&self, args: &Arguments) -> Result<Option<Bytes>> {
        if self.transferless {
            if args.transfer.is_some() {
                return Err(FrameError::UnexpectedArgument {
                    command: self.to_string(),
                    field: "transfer".to_string(),
                });
            }
            return Ok(None);
        }

        if let Some(raw) = &args.transfer {
            return Ok(Some(raw.clone()));
        }

        let Some(fields) = self.transfer else {
            return Err(FrameError::MissingTransfer {
                command: self.to_string(),
                field: None,
            });
        };

        let mut transfer = BytesMut::new();
        for (name, field) in fields.iter() {
            let value = args.values.get(*name);
            if value.is_none() && !field.is_const() {
                return Err(FrameError::MissingTransfer {
                    command: self.to_string(),
                    field: Some(name.to_string()),
                });
            }
            field.encode(name, value, &mut transfer)?;
        }
        Ok(Some(transfer.freeze()))
    }

    fn data_length_argument(&self, args: &Arguments) -> Option<u32> {
        if !self.arguments.iter().any(|(n, _)| *n == DATA_LENGTH_ARGUMENT) {
            return None;
        }
        args.values
            .get(DATA_LENGTH_ARGUMENT)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }

    /// Decode raw argument bytes into named values.
    pub fn decode_arguments(&self, raw: &[u8]) -> Result<Vec<(String, Value)>> {
        let mut cursor = raw;
        let mut values = Vec::with_capacity(self.arguments.len());
        for (name, field) in self.arguments.iter() {
            values.push((name.to_string(), field.decode(name, &mut cursor)?));
        }
        Ok(values)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "{} {} (TX.{})",
                self.facility, self.code, self.transferless
            ),
        }
    }
}

/// Caller-supplied values for one command invocation.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: BTreeMap<String, Value>,
    data_length: Option<u32>,
    transfer: Option<Bytes>,
    response: Option<ResponseLayout>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a named argument or transfer field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Add a named value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Override the resolved data length.
    pub fn data_length(mut self, length: u32) -> Self {
        self.data_length = Some(length);
        self
    }

    /// Send these bytes as the transfer payload instead of building one.
    pub fn transfer_bytes(mut self, raw: impl Into<Bytes>) -> Self {
        self.transfer = Some(raw.into());
        self
    }

    /// Interpret the response with this layout instead of the command's.
    pub fn response(mut self, layout: ResponseLayout) -> Self {
        self.response = Some(layout);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn response_override(&self) -> Option<ResponseLayout> {
        self.response
    }
}

/// A command ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    /// Header plus inline arguments.
    pub packet: Bytes,
    /// The length written into the header.
    pub data_length: u32,
    /// Bytes to read before the status trailer.
    pub response_len: usize,
    /// Bulk payload sent after the packet, if any.
    pub transfer: Option<Bytes>,
}

/// The fields of a decoded command packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPacket {
    pub facility: Facility,
    pub code: u8,
    pub transferless: bool,
    pub data_length: u32,
    pub arguments: Bytes,
}

impl CommandPacket {
    pub fn triple(&self) -> (Facility, u8, bool) {
        (self.facility, self.code, self.transferless)
    }
}

/// Decode a command packet.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────┬──────────┬─────────────┬───────────────┐
/// │ Magic (2B)   │ Code (1B)        │ Facility │ DataLength  │ Arguments     │
/// │ 0xF9 0x2E    │ code | tx << 7   │ (1B)     │ (4B LE)     │ (rest)        │
/// └──────────────┴──────────────────┴──────────┴─────────────┴───────────────┘
/// ```
pub fn decode_command_packet(src: &[u8]) -> Result<CommandPacket> {
    if src.len() < COMMAND_HEADER_SIZE {
        return Err(FrameError::Truncated {
            needed: COMMAND_HEADER_SIZE,
            available: src.len(),
        });
    }

    let magic = u16::from_le_bytes([src[0], src[1]]);
    if magic != COMMAND_MAGIC {
        return Err(FrameError::BadMagic {
            expected: COMMAND_MAGIC,
            found: magic,
        });
    }

    Ok(CommandPacket {
        code: src[2] & CODE_MASK,
        transferless: src[2] & TRANSFERLESS_BIT != 0,
        facility: Facility::new(src[3]),
        data_length: u32::from_le_bytes([src[4], src[5], src[6], src[7]]),
        arguments: Bytes::copy_from_slice(&src[COMMAND_HEADER_SIZE..]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static GET_API_VERSION: Command = Command::new(Facility::LIBRARY_JUTIL, 6, true)
        .named("CoreModuleGetApiVersion")
        .with_response(Field::U32);

    static CHUNK_RANGE_DATA: Command = Command::new(Facility::LIBRARY_LOGGER, 15, true)
        .named("LoggerGetChunkRangeData")
        .with_arguments(&[
            ("StartingSeqNumber", Field::U32),
            ("EndingSeqNumber", Field::U32),
            ("DataLength", Field::U32),
        ])
        .with_response(Field::Greedy);

    static SDK_CHECK: Command = Command::new(Facility::LIBRARY_JUTIL, 7, false)
        .named("CoreModuleSdkCheck")
        .with_transfer(&[
            ("Platform", Field::U8),
            ("Reserved", Field::U8),
            ("Three", Field::Const(&[3, 0])),
        ])
        .status_only();

    static NOTIFICATION: Command = Command::new(Facility::MODULE_NOTIFICATION, 0, false);

    static CHUNK_DATA: Command = Command::new(Facility::LIBRARY_LOGGER, 1, true);

    #[test]
    fn transferless_packet_layout() {
        let built = GET_API_VERSION.build(&Arguments::new()).unwrap();
        assert_eq!(
            &built.packet[..],
            &[0xF9, 0x2E, 0x86, 0x76, 4, 0, 0, 0]
        );
        assert_eq!(built.response_len, 4);
        assert_eq!(built.transfer, None);
    }

    #[test]
    fn raw_code_packs_code_and_facility() {
        assert_eq!(GET_API_VERSION.raw_code(), 0x7686);
        assert_eq!(SDK_CHECK.code_byte(), 0x07);
    }

    #[test]
    fn declared_data_length_from_layouts() {
        assert_eq!(GET_API_VERSION.declared_data_length(), Some(4));
        assert_eq!(SDK_CHECK.declared_data_length(), Some(4));
        assert_eq!(CHUNK_RANGE_DATA.declared_data_length(), None);
        assert_eq!(NOTIFICATION.declared_data_length(), None);
    }

    #[test]
    fn transfer_with_const_field() {
        let args = Arguments::new().with("Platform", 3u8).with("Reserved", 0u8);
        let built = SDK_CHECK.build(&args).unwrap();
        assert_eq!(built.transfer.as_deref(), Some(&[3u8, 0, 3, 0][..]));
        assert_eq!(built.data_length, 4);
        assert_eq!(built.response_len, 0);
    }

    #[test]
    fn missing_transfer_field_fails() {
        let args = Arguments::new().with("Platform", 3u8);
        let result = SDK_CHECK.build(&args);
        assert!(matches!(
            result,
            Err(FrameError::MissingTransfer { field: Some(ref f), .. }) if f == "Reserved"
        ));
    }

    #[test]
    fn missing_transfer_layout_fails() {
        let result = NOTIFICATION.build(&Arguments::new());
        assert!(matches!(
            result,
            Err(FrameError::MissingTransfer { field: None, .. })
        ));
    }

    #[test]
    fn raw_transfer_resolves_data_length() {
        let args = Arguments::new().transfer_bytes(vec![1u8, 2, 3]);
        let built = NOTIFICATION.build(&args).unwrap();
        assert_eq!(built.data_length, 3);
        assert_eq!(built.response_len, 3);
        assert_eq!(built.transfer.as_deref(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn missing_argument_fails() {
        let args = Arguments::new().with("StartingSeqNumber", 1u32);
        let result = CHUNK_RANGE_DATA.build(&args);
        assert!(matches!(
            result,
            Err(FrameError::MissingArgument { ref field, .. }) if field == "EndingSeqNumber"
        ));
    }

    #[test]
    fn data_length_argument_sets_packet_length() {
        let args = Arguments::new()
            .with("StartingSeqNumber", 1u32)
            .with("EndingSeqNumber", 9u32)
            .with("DataLength", 512u32);
        let built = CHUNK_RANGE_DATA.build(&args).unwrap();
        assert_eq!(built.data_length, 512);
        assert_eq!(built.response_len, 512);
        assert_eq!(built.packet.len(), COMMAND_HEADER_SIZE + 12);
    }

    #[test]
    fn explicit_data_length_wins() {
        let built = GET_API_VERSION
            .build(&Arguments::new().data_length(64))
            .unwrap();
        assert_eq!(built.data_length, 64);
        assert_eq!(built.response_len, 4);
    }

    #[test]
    fn unresolved_data_length_fails() {
        let result = CHUNK_DATA.build(&Arguments::new());
        assert!(matches!(result, Err(FrameError::MissingDataLength { .. })));
    }

    #[test]
    fn response_override_changes_length() {
        let args = Arguments::new()
            .data_length(10)
            .response(ResponseLayout::Layout(Field::U16));
        let built = CHUNK_DATA.build(&args).unwrap();
        assert_eq!(built.response_len, 2);
    }

    #[test]
    fn undeclared_argument_is_rejected() {
        let args = Arguments::new().with("Bogus", 1u8);
        let result = GET_API_VERSION.build(&args);
        assert!(matches!(result, Err(FrameError::UnexpectedArgument { .. })));
    }

    #[test]
    fn transferless_command_rejects_transfer_bytes() {
        let args = Arguments::new().transfer_bytes(vec![0u8]);
        let result = GET_API_VERSION.build(&args);
        assert!(matches!(result, Err(FrameError::UnexpectedArgument { .. })));
    }

    #[test]
    fn decode_recovers_built_packet() {
        let args = Arguments::new()
            .with("StartingSeqNumber", 1u32)
            .with("EndingSeqNumber", 9u32)
            .with("DataLength", 512u32);
        let built = CHUNK_RANGE_DATA.build(&args).unwrap();
        let packet = decode_command_packet(&built.packet).unwrap();
        assert_eq!(packet.triple(), CHUNK_RANGE_DATA.triple());
        assert_eq!(packet.data_length, 512);

        let values = CHUNK_RANGE_DATA.decode_arguments(&packet.arguments).unwrap();
        assert_eq!(values[1], ("EndingSeqNumber".to_string(), Value::Int(9)));
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let result = decode_command_packet(&[0xFE, 0xA6, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            result,
            Err(FrameError::BadMagic {
                expected: COMMAND_MAGIC,
                ..
            })
        ));
    }

    #[test]
    fn decode_rejects_short_header() {
        let result = decode_command_packet(&[0xF9, 0x2E, 0x86]);
        assert!(matches!(result, Err(FrameError::Truncated { .. })));
    }

    #[test]
    fn unnamed_command_display() {
        assert_eq!(NOTIFICATION.to_string(), "ModuleNotification 0 (TX.false)");
    }
}
