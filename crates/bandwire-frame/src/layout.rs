//! Binary field descriptors and the values they carry.
//!
//! A [`Field`] describes how one named value is laid out on the wire. Fields
//! are `const`-constructible so command layouts can live in static tables.
//! All integers are little-endian.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::error::{FrameError, Result};

/// An ordered list of named fields.
pub type Fields = &'static [(&'static str, Field)];

/// Wire layout of a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    U8,
    U16,
    U32,
    U64,
    /// One-byte boolean.
    Flag,
    /// Boolean widened to a 4-byte little-endian word.
    Bool32,
    /// Exactly `n` opaque bytes.
    Bytes(usize),
    /// 16-byte GUID in RFC 4122 byte order.
    Guid,
    /// UTF-8 text zero-padded to `n` bytes.
    Utf8(usize),
    /// UTF-16LE text zero-padded to `n` bytes.
    Utf16(usize),
    /// All remaining bytes.
    Greedy,
    /// Fixed bytes; never supplied by the caller.
    Const(&'static [u8]),
    /// Named sub-fields in order.
    Struct(Fields),
    /// `n` repetitions of the element layout.
    Array(usize, &'static Field),
    /// A `u32` element count followed by that many elements.
    PrefixedArray(&'static Field),
    /// The inner layout zero-padded to exactly `n` bytes.
    Padded(usize, &'static Field),
}

impl Field {
    /// Static wire size, or `None` when the size depends on the value.
    pub const fn sizeof(&self) -> Option<usize> {
        match self {
            Self::U8 | Self::Flag => Some(1),
            Self::U16 => Some(2),
            Self::U32 | Self::Bool32 => Some(4),
            Self::U64 => Some(8),
            Self::Guid => Some(16),
            Self::Bytes(n) | Self::Utf8(n) | Self::Utf16(n) | Self::Padded(n, _) => Some(*n),
            Self::Const(bytes) => Some(bytes.len()),
            Self::Greedy | Self::PrefixedArray(_) => None,
            Self::Struct(fields) => fields_sizeof(fields),
            Self::Array(n, element) => match element.sizeof() {
                Some(size) => Some(size * *n),
                None => None,
            },
        }
    }

    pub const fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Encode `value` into `dst`. Constant fields ignore `value`.
    pub fn encode(&self, name: &str, value: Option<&Value>, dst: &mut BytesMut) -> Result<()> {
        let Some(value) = value else {
            if let Self::Const(bytes) = self {
                dst.put_slice(bytes);
                return Ok(());
            }
            return Err(FrameError::layout(name, "no value supplied"));
        };

        match self {
            Self::Const(bytes) => dst.put_slice(bytes),
            Self::U8 => dst.put_u8(int_in_range(name, value, u8::MAX as u64)? as u8),
            Self::U16 => dst.put_u16_le(int_in_range(name, value, u16::MAX as u64)? as u16),
            Self::U32 => dst.put_u32_le(int_in_range(name, value, u32::MAX as u64)? as u32),
            Self::U64 => dst.put_u64_le(int_in_range(name, value, u64::MAX)?),
            Self::Flag => dst.put_u8(bool_value(name, value)? as u8),
            Self::Bool32 => dst.put_u32_le(bool_value(name, value)? as u32),
            Self::Bytes(n) => {
                let bytes = bytes_value(name, value)?;
                if bytes.len() != *n {
                    return Err(FrameError::layout(
                        name,
                        format!("expected {n} bytes, got {}", bytes.len()),
                    ));
                }
                dst.put_slice(bytes);
            }
            Self::Guid => match value {
                Value::Guid(guid) => dst.put_slice(guid.as_bytes()),
                Value::Bytes(bytes) if bytes.len() == 16 => dst.put_slice(bytes),
                other => return Err(mismatch(name, "guid", other)),
            },
            Self::Utf8(n) => {
                let text = text_value(name, value)?;
                put_padded(name, text.as_bytes(), *n, dst)?;
            }
            Self::Utf16(n) => {
                let text = text_value(name, value)?;
                let encoded: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
                put_padded(name, &encoded, *n, dst)?;
            }
            Self::Greedy => dst.put_slice(bytes_value(name, value)?),
            Self::Struct(fields) => {
                let Value::Record(entries) = value else {
                    return Err(mismatch(name, "record", value));
                };
                for (field_name, field) in fields.iter() {
                    let entry = lookup(entries, field_name);
                    if entry.is_none() && !field.is_const() {
                        return Err(FrameError::layout(
                            format!("{name}.{field_name}"),
                            "no value supplied",
                        ));
                    }
                    field.encode(field_name, entry, dst)?;
                }
            }
            Self::Array(n, element) => {
                let items = list_value(name, value)?;
                if items.len() != *n {
                    return Err(FrameError::layout(
                        name,
                        format!("expected {n} elements, got {}", items.len()),
                    ));
                }
                for item in items {
                    element.encode(name, Some(item), dst)?;
                }
            }
            Self::PrefixedArray(element) => {
                let items = list_value(name, value)?;
                let count = u32::try_from(items.len()).map_err(|_| FrameError::PacketTooLarge {
                    size: items.len(),
                    max: u32::MAX as usize,
                })?;
                dst.put_u32_le(count);
                for item in items {
                    element.encode(name, Some(item), dst)?;
                }
            }
            Self::Padded(n, inner) => {
                let mut scratch = BytesMut::new();
                inner.encode(name, Some(value), &mut scratch)?;
                put_padded(name, &scratch, *n, dst)?;
            }
        }
        Ok(())
    }

    /// Decode one value, advancing `src` past it.
    pub fn decode(&self, name: &str, src: &mut &[u8]) -> Result<Value> {
        let value = match self {
            Self::U8 => Value::Int(take(name, src, 1)?[0] as u64),
            Self::U16 => {
                let raw = take(name, src, 2)?;
                Value::Int(u16::from_le_bytes([raw[0], raw[1]]) as u64)
            }
            Self::U32 => Value::Int(read_u32(name, src)? as u64),
            Self::U64 => {
                let raw = take(name, src, 8)?;
                let mut word = [0u8; 8];
                word.copy_from_slice(raw);
                Value::Int(u64::from_le_bytes(word))
            }
            Self::Flag => Value::Bool(take(name, src, 1)?[0] != 0),
            Self::Bool32 => Value::Bool(read_u32(name, src)? != 0),
            Self::Bytes(n) => Value::Bytes(Bytes::copy_from_slice(take(name, src, *n)?)),
            Self::Guid => {
                let raw = take(name, src, 16)?;
                let mut guid = [0u8; 16];
                guid.copy_from_slice(raw);
                Value::Guid(Uuid::from_bytes(guid))
            }
            Self::Utf8(n) => {
                let raw = take(name, src, *n)?;
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                Value::Text(String::from_utf8_lossy(&raw[..end]).into_owned())
            }
            Self::Utf16(n) => {
                let raw = take(name, src, *n)?;
                let units: Vec<u16> = raw
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .take_while(|&unit| unit != 0)
                    .collect();
                Value::Text(String::from_utf16_lossy(&units))
            }
            Self::Greedy => {
                let rest = Bytes::copy_from_slice(src);
                *src = &[];
                Value::Bytes(rest)
            }
            Self::Const(expected) => {
                let raw = take(name, src, expected.len())?;
                if raw != *expected {
                    return Err(FrameError::layout(
                        name,
                        format!(
                            "constant mismatch (expected {}, found {})",
                            hex::encode(expected),
                            hex::encode(raw)
                        ),
                    ));
                }
                Value::Bytes(Bytes::from_static(expected))
            }
            Self::Struct(fields) => {
                let mut entries = Vec::with_capacity(fields.len());
                for (field_name, field) in fields.iter() {
                    entries.push((field_name.to_string(), field.decode(field_name, src)?));
                }
                Value::Record(entries)
            }
            Self::Array(n, element) => {
                let mut items = Vec::with_capacity(*n);
                for _ in 0..*n {
                    items.push(element.decode(name, src)?);
                }
                Value::List(items)
            }
            Self::PrefixedArray(element) => {
                let count = read_u32(name, src)? as usize;
                let mut items = Vec::new();
                for _ in 0..count {
                    items.push(element.decode(name, src)?);
                }
                Value::List(items)
            }
            Self::Padded(n, inner) => {
                let mut window = take(name, src, *n)?;
                inner.decode(name, &mut window)?
            }
        };
        Ok(value)
    }

    /// Decode a value from the start of `src`. Trailing bytes are ignored.
    pub fn parse(&self, name: &str, src: &[u8]) -> Result<Value> {
        let mut cursor = src;
        self.decode(name, &mut cursor)
    }

    /// Parse a scalar value from its textual form.
    ///
    /// Integers accept decimal or `0x` hex, booleans `true`/`false`/`1`/`0`,
    /// byte fields hex, GUIDs their hyphenated form.
    pub fn parse_value(&self, name: &str, text: &str) -> Result<Value> {
        let text = text.trim();
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => parse_int(text)
                .map(Value::Int)
                .ok_or_else(|| FrameError::layout(name, format!("not an integer: {text}"))),
            Self::Flag | Self::Bool32 => match text.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(FrameError::layout(name, format!("not a boolean: {text}"))),
            },
            Self::Bytes(_) | Self::Greedy => hex::decode(text.trim_start_matches("0x"))
                .map(|raw| Value::Bytes(raw.into()))
                .map_err(|e| FrameError::layout(name, format!("invalid hex: {e}"))),
            Self::Guid => Uuid::parse_str(text)
                .map(Value::Guid)
                .map_err(|e| FrameError::layout(name, format!("invalid guid: {e}"))),
            Self::Utf8(_) | Self::Utf16(_) => Ok(Value::Text(text.to_string())),
            Self::Padded(_, inner) => inner.parse_value(name, text),
            Self::Const(_) => Err(FrameError::layout(name, "constant fields take no value")),
            Self::Struct(_) | Self::Array(..) | Self::PrefixedArray(_) => Err(FrameError::layout(
                name,
                "composite fields have no textual form",
            )),
        }
    }
}

/// Combined static size of a field list.
pub const fn fields_sizeof(fields: &[(&str, Field)]) -> Option<usize> {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        match fields[i].1.sizeof() {
            Some(size) => total += size,
            None => return None,
        }
        i += 1;
    }
    Some(total)
}

/// A decoded (or caller-supplied) field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(u64),
    Bool(bool),
    Bytes(Bytes),
    Text(String),
    Guid(Uuid),
    List(Vec<Value>),
    Record(Vec<(String, Value)>),
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a named entry of a record.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(entries) => lookup(entries, name),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Bytes(b) => f.write_str(&hex::encode(b)),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Guid(g) => write!(f, "{g}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Record(entries) => {
                f.write_str("{")?;
                for (i, (name, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_u64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Bytes(b) => serializer.serialize_str(&hex::encode(b)),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Guid(g) => serializer.collect_str(g),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Record(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, item) in entries {
                    map.serialize_entry(name, item)?;
                }
                map.end()
            }
        }
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Self::Int(n as u64)
            }
        })*
    };
}

int_value!(u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b.into())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Uuid> for Value {
    fn from(g: Uuid) -> Self {
        Self::Guid(g)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

fn lookup<'a>(entries: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
}

fn take<'a>(name: &str, src: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if src.len() < n {
        return Err(FrameError::layout(
            name,
            format!("needs {n} bytes, {} available", src.len()),
        ));
    }
    let (head, tail) = src.split_at(n);
    *src = tail;
    Ok(head)
}

fn read_u32(name: &str, src: &mut &[u8]) -> Result<u32> {
    let raw = take(name, src, 4)?;
    Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

fn put_padded(name: &str, bytes: &[u8], width: usize, dst: &mut BytesMut) -> Result<()> {
    if bytes.len() > width {
        return Err(FrameError::layout(
            name,
            format!("{} bytes do not fit in {width}", bytes.len()),
        ));
    }
    dst.put_slice(bytes);
    dst.put_bytes(0, width - bytes.len());
    Ok(())
}

fn parse_int(text: &str) -> Option<u64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Int(_) => "integer",
        Value::Bool(_) => "boolean",
        Value::Bytes(_) => "bytes",
        Value::Text(_) => "text",
        Value::Guid(_) => "guid",
        Value::List(_) => "list",
        Value::Record(_) => "record",
    }
}

fn mismatch(name: &str, expected: &str, found: &Value) -> FrameError {
    FrameError::layout(name, format!("expected {expected}, got {}", kind(found)))
}

fn int_in_range(name: &str, value: &Value, max: u64) -> Result<u64> {
    match value {
        Value::Int(n) if *n <= max => Ok(*n),
        Value::Int(n) => Err(FrameError::layout(name, format!("{n} exceeds {max}"))),
        Value::Bool(b) => Ok(*b as u64),
        other => Err(mismatch(name, "integer", other)),
    }
}

fn bool_value(name: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(0) => Ok(false),
        Value::Int(1) => Ok(true),
        other => Err(mismatch(name, "boolean", other)),
    }
}

fn bytes_value<'a>(name: &str, value: &'a Value) -> Result<&'a [u8]> {
    match value {
        Value::Bytes(b) => Ok(b),
        other => Err(mismatch(name, "bytes", other)),
    }
}

fn text_value<'a>(name: &str, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(mismatch(name, "text", other)),
    }
}

fn list_value<'a>(name: &str, value: &'a Value) -> Result<&'a [Value]> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(mismatch(name, "list", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: Field = Field::Struct(&[
        ("Major", Field::U16),
        ("Minor", Field::U16),
        ("Revision", Field::U32),
        ("Build", Field::U32),
        ("Debug", Field::Flag),
    ]);

    fn encode(field: &Field, value: &Value) -> BytesMut {
        let mut buf = BytesMut::new();
        field.encode("test", Some(value), &mut buf).unwrap();
        buf
    }

    #[test]
    fn static_sizes() {
        assert_eq!(VERSION.sizeof(), Some(13));
        assert_eq!(Field::Array(3, &VERSION).sizeof(), Some(39));
        assert_eq!(Field::Padded(88, &Field::Greedy).sizeof(), Some(88));
        assert_eq!(Field::Greedy.sizeof(), None);
        assert_eq!(Field::PrefixedArray(&Field::U8).sizeof(), None);
        assert_eq!(fields_sizeof(&[("A", Field::U8), ("B", Field::Bool32)]), Some(5));
        assert_eq!(fields_sizeof(&[]), Some(0));
    }

    #[test]
    fn struct_decodes_to_record() {
        let wire = [1, 0, 2, 0, 3, 0, 0, 0, 4, 0, 0, 0, 1];
        let value = VERSION.parse("Version", &wire).unwrap();
        assert_eq!(value.get("Major"), Some(&Value::Int(1)));
        assert_eq!(value.get("Build"), Some(&Value::Int(4)));
        assert_eq!(value.get("Debug"), Some(&Value::Bool(true)));
        assert_eq!(&encode(&VERSION, &value)[..], &wire);
    }

    #[test]
    fn bool32_is_four_bytes() {
        assert_eq!(&encode(&Field::Bool32, &Value::Bool(true))[..], &[1, 0, 0, 0]);
        assert_eq!(
            Field::Bool32.parse("flag", &[0, 0, 0, 0]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn utf16_is_zero_padded() {
        let buf = encode(&Field::Utf16(8), &Value::from("ab"));
        assert_eq!(&buf[..], &[b'a', 0, b'b', 0, 0, 0, 0, 0]);
        assert_eq!(
            Field::Utf16(8).parse("name", &buf).unwrap(),
            Value::from("ab")
        );
    }

    #[test]
    fn utf8_overflow_is_rejected() {
        let mut buf = BytesMut::new();
        let result = Field::Utf8(2).encode("name", Some(&Value::from("abc")), &mut buf);
        assert!(matches!(result, Err(FrameError::Layout { .. })));
    }

    #[test]
    fn integer_range_is_checked() {
        let mut buf = BytesMut::new();
        let result = Field::U8.encode("count", Some(&Value::Int(256)), &mut buf);
        assert!(matches!(result, Err(FrameError::Layout { .. })));
    }

    #[test]
    fn const_ignores_value_and_verifies_on_decode() {
        let field = Field::Const(&[3, 0]);
        let mut buf = BytesMut::new();
        field.encode("Three", None, &mut buf).unwrap();
        assert_eq!(&buf[..], &[3, 0]);
        assert!(matches!(
            field.parse("Three", &[4, 0]),
            Err(FrameError::Layout { .. })
        ));
    }

    #[test]
    fn guid_uses_rfc_byte_order() {
        let guid = Uuid::parse_str("c742e1a3-6320-5abc-9643-d206c677e580").unwrap();
        let buf = encode(&Field::Guid, &Value::Guid(guid));
        assert_eq!(buf[0], 0xC7);
        assert_eq!(buf[15], 0x80);
        assert_eq!(Field::Guid.parse("id", &buf).unwrap(), Value::Guid(guid));
    }

    #[test]
    fn padded_window_is_skipped_whole() {
        let field = Field::Struct(&[("Inner", Field::Padded(4, &Field::U8)), ("After", Field::U8)]);
        let value = field.parse("s", &[7, 9, 9, 9, 5]).unwrap();
        assert_eq!(value.get("Inner"), Some(&Value::Int(7)));
        assert_eq!(value.get("After"), Some(&Value::Int(5)));
    }

    #[test]
    fn prefixed_array_carries_count() {
        let field = Field::PrefixedArray(&Field::U16);
        let buf = encode(&field, &Value::List(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(&buf[..], &[2, 0, 0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn truncated_input_is_a_layout_error() {
        let result = Field::U32.parse("n", &[1, 2]);
        assert!(matches!(result, Err(FrameError::Layout { .. })));
    }

    #[test]
    fn greedy_consumes_rest() {
        let mut cursor: &[u8] = &[1, 2, 3];
        let value = Field::Greedy.decode("rest", &mut cursor).unwrap();
        assert_eq!(value.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert!(cursor.is_empty());
    }

    #[test]
    fn parse_value_from_text() {
        assert_eq!(Field::U32.parse_value("n", "0x1F").unwrap(), Value::Int(31));
        assert_eq!(Field::U16.parse_value("n", "42").unwrap(), Value::Int(42));
        assert_eq!(Field::Bool32.parse_value("f", "true").unwrap(), Value::Bool(true));
        assert_eq!(
            Field::Greedy.parse_value("b", "0a0b").unwrap(),
            Value::Bytes(Bytes::from_static(&[0x0A, 0x0B]))
        );
        assert!(Field::Struct(&[]).parse_value("s", "x").is_err());
    }

    #[test]
    fn value_serializes_bytes_as_hex() {
        let value = Value::Record(vec![
            ("Id".to_string(), Value::Bytes(Bytes::from_static(&[0xAB, 0x01]))),
            ("Count".to_string(), Value::Int(3)),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"Id":"ab01","Count":3}"#);
    }
}
