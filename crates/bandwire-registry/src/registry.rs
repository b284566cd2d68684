use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use bandwire_frame::{decode_command_packet, Command, Facility};
use bytes::Bytes;
use tracing::debug;

use crate::catalog::COMMANDS;
use crate::error::{RegistryError, Result};

/// A way of naming a registered command.
#[derive(Debug, Clone, Copy)]
pub enum CommandKey<'a> {
    /// The command's name.
    Name(&'a str),
    /// Code byte and facility read as a little-endian `u16`.
    Code(u16),
    /// `(facility, code, transferless)`.
    Triple(Facility, u8, bool),
    /// A descriptor, resolved to the registered entry with the same triple.
    Command(&'a Command),
}

impl fmt::Display for CommandKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Code(code) => write!(f, "{code:#06X}"),
            Self::Triple(facility, code, transferless) => {
                write!(f, "{facility} {code} (TX.{transferless})")
            }
            Self::Command(command) => write!(f, "{command}"),
        }
    }
}

impl<'a> From<&'a str> for CommandKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<u16> for CommandKey<'_> {
    fn from(code: u16) -> Self {
        Self::Code(code)
    }
}

impl From<[u8; 2]> for CommandKey<'_> {
    fn from(raw: [u8; 2]) -> Self {
        Self::Code(u16::from_le_bytes(raw))
    }
}

impl From<(Facility, u8, bool)> for CommandKey<'_> {
    fn from((facility, code, transferless): (Facility, u8, bool)) -> Self {
        Self::Triple(facility, code, transferless)
    }
}

impl<'a> From<&'a Command> for CommandKey<'a> {
    fn from(command: &'a Command) -> Self {
        Self::Command(command)
    }
}

/// A decoded incoming command packet.
#[derive(Debug, Clone)]
pub struct IncomingCommand {
    pub command: &'static Command,
    pub data_length: u32,
    pub arguments: Bytes,
}

/// Immutable command table with O(1) lookup by name, raw code, or triple.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<&'static Command>,
    by_name: HashMap<&'static str, usize>,
    by_code: HashMap<u16, usize>,
    by_triple: HashMap<(Facility, u8, bool), usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of descriptors.
    ///
    /// Fails on the first triple or name collision.
    pub fn from_commands(commands: &[&'static Command]) -> Result<Self> {
        let mut registry = Self::new();
        for &command in commands {
            registry.register(command)?;
        }
        debug!(count = registry.len(), "command registry built");
        Ok(registry)
    }

    /// The shared registry of built-in commands.
    pub fn builtin() -> Result<Arc<Self>> {
        static BUILTIN: OnceLock<Arc<CommandRegistry>> = OnceLock::new();
        if let Some(registry) = BUILTIN.get() {
            return Ok(Arc::clone(registry));
        }
        let registry = Arc::new(Self::from_commands(COMMANDS)?);
        Ok(Arc::clone(BUILTIN.get_or_init(|| registry)))
    }

    /// Add a command. Fails with `DuplicateCommand` if its triple or name is taken.
    pub fn register(&mut self, command: &'static Command) -> Result<()> {
        if let Some(&index) = self.by_triple.get(&command.triple()) {
            return Err(self.duplicate(command, index));
        }
        if let Some(name) = command.name {
            if let Some(&index) = self.by_name.get(name) {
                return Err(self.duplicate(command, index));
            }
        }

        let index = self.commands.len();
        self.commands.push(command);
        self.by_triple.insert(command.triple(), index);
        self.by_code.insert(command.raw_code(), index);
        if let Some(name) = command.name {
            self.by_name.insert(name, index);
        }
        Ok(())
    }

    fn duplicate(&self, command: &Command, existing: usize) -> RegistryError {
        RegistryError::DuplicateCommand {
            command: command.to_string(),
            existing: self.commands[existing].to_string(),
        }
    }

    /// Resolve a key to its registered command.
    pub fn lookup<'k>(&self, key: impl Into<CommandKey<'k>>) -> Result<&'static Command> {
        let key = key.into();
        let index = match key {
            CommandKey::Name(name) => self.by_name.get(name),
            CommandKey::Code(code) => self.by_code.get(&code),
            CommandKey::Triple(facility, code, transferless) => {
                self.by_triple.get(&(facility, code, transferless))
            }
            CommandKey::Command(command) => self.by_triple.get(&command.triple()),
        };
        index
            .map(|&i| self.commands[i])
            .ok_or_else(|| RegistryError::UnknownCommand(key.to_string()))
    }

    /// Decode a command packet and resolve its command.
    ///
    /// Used by diagnostic and replay tooling; the send path never parses packets.
    pub fn parse_incoming(&self, packet: &[u8]) -> Result<IncomingCommand> {
        let decoded = decode_command_packet(packet)?;
        let (facility, code, transferless) = decoded.triple();
        let command = self.lookup(CommandKey::Triple(facility, code, transferless))?;
        Ok(IncomingCommand {
            command,
            data_length: decoded.data_length,
            arguments: decoded.arguments,
        })
    }

    /// Registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Command> + '_ {
        self.commands.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use bandwire_frame::{Arguments, Field, Fields, FrameError, Value, DATA_LENGTH_ARGUMENT};

    use super::*;
    use crate::catalog;

    static FIRST: Command = Command::new(Facility::LIBRARY_TIME, 9, true).named("First");
    static SAME_TRIPLE: Command = Command::new(Facility::LIBRARY_TIME, 9, true).named("Other");
    static SAME_NAME: Command = Command::new(Facility::LIBRARY_TIME, 9, false).named("First");

    #[test]
    fn builtin_catalog_has_no_collisions() {
        let registry = CommandRegistry::from_commands(catalog::COMMANDS).unwrap();
        assert_eq!(registry.len(), catalog::COMMANDS.len());
    }

    #[test]
    fn builtin_is_shared() {
        let a = CommandRegistry::builtin().unwrap();
        let b = CommandRegistry::builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn duplicate_triple_is_rejected() {
        let result = CommandRegistry::from_commands(&[&FIRST, &SAME_TRIPLE]);
        assert!(matches!(result, Err(RegistryError::DuplicateCommand { .. })));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let result = CommandRegistry::from_commands(&[&FIRST, &SAME_NAME]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateCommand { ref existing, .. }) if existing == "First"
        ));
    }

    #[test]
    fn every_key_resolves_to_same_entry() {
        let registry = CommandRegistry::builtin().unwrap();
        let by_name = registry.lookup("CoreModuleGetApiVersion").unwrap();
        let by_code = registry.lookup(0x7686u16).unwrap();
        let by_bytes = registry.lookup([0x86u8, 0x76]).unwrap();
        let by_triple = registry
            .lookup((Facility::LIBRARY_JUTIL, 6, true))
            .unwrap();
        let by_command = registry.lookup(&catalog::CORE_MODULE_GET_API_VERSION).unwrap();

        for found in [by_code, by_bytes, by_triple, by_command] {
            assert!(std::ptr::eq(by_name, found));
        }
        assert!(std::ptr::eq(by_name, &catalog::CORE_MODULE_GET_API_VERSION));
    }

    #[test]
    fn unknown_command_fails() {
        let registry = CommandRegistry::builtin().unwrap();
        assert!(matches!(
            registry.lookup("NoSuchCommand"),
            Err(RegistryError::UnknownCommand(_))
        ));
        assert!(matches!(
            registry.lookup((Facility::MAX, 0x7F, true)),
            Err(RegistryError::UnknownCommand(_))
        ));
    }

    #[test]
    fn parse_incoming_recovers_build() {
        let registry = CommandRegistry::builtin().unwrap();
        let command = registry.lookup("EFlashRead").unwrap();
        let args = Arguments::new()
            .with("Address", 0x1000u32)
            .with("DataLength", 256u32);
        let built = command.build(&args).unwrap();

        let incoming = registry.parse_incoming(&built.packet).unwrap();
        assert!(std::ptr::eq(incoming.command, command));
        assert_eq!(incoming.data_length, 256);
        assert_eq!(&incoming.arguments[..], &[0x00, 0x10, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn parse_incoming_surfaces_framing_errors() {
        let registry = CommandRegistry::builtin().unwrap();
        let result = registry.parse_incoming(&[0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            result,
            Err(RegistryError::Frame(FrameError::BadMagic { .. }))
        ));
    }

    /// A value that fits `field`, constants included.
    fn sample(field: &Field) -> Value {
        match field {
            Field::U8 | Field::U16 | Field::U32 | Field::U64 => Value::Int(1),
            Field::Flag | Field::Bool32 => Value::Bool(true),
            Field::Bytes(n) => Value::Bytes(Bytes::from(vec![0x5A; *n])),
            Field::Guid => Value::Bytes(Bytes::from_static(&[0x11; 16])),
            Field::Utf8(n) => Value::Text("a".repeat((*n).min(3))),
            Field::Utf16(n) => Value::Text("a".repeat((*n / 2).min(3))),
            Field::Greedy => Value::Bytes(Bytes::from_static(&[1, 2, 3])),
            Field::Const(bytes) => Value::Bytes(Bytes::from_static(*bytes)),
            Field::Struct(fields) => Value::Record(
                fields
                    .iter()
                    .map(|(name, field)| (name.to_string(), sample(field)))
                    .collect(),
            ),
            Field::Array(n, element) => Value::List(vec![sample(element); *n]),
            Field::PrefixedArray(element) => Value::List(vec![sample(element)]),
            Field::Padded(_, inner) => sample(inner),
        }
    }

    fn decode_fields(fields: Fields, raw: &[u8]) -> Vec<(String, Value)> {
        let mut cursor = raw;
        fields
            .iter()
            .map(|(name, field)| (name.to_string(), field.decode(name, &mut cursor).unwrap()))
            .collect()
    }

    #[test]
    fn build_and_parse_every_command() {
        let registry = CommandRegistry::builtin().unwrap();
        for command in registry.iter() {
            let supplied: Vec<(String, Value)> = command
                .arguments
                .iter()
                .map(|(name, field)| (name.to_string(), sample(field)))
                .collect();
            let mut args = Arguments::new();
            for (name, value) in &supplied {
                args.insert(name.clone(), value.clone());
            }

            let mut raw_transfer = None;
            if !command.transferless {
                match command.transfer {
                    Some(fields) => {
                        for (name, field) in fields.iter() {
                            args.insert(*name, sample(field));
                        }
                    }
                    None => raw_transfer = Some(Bytes::from_static(&[0xAB; 4])),
                }
            }
            if let Some(raw) = &raw_transfer {
                args = args.transfer_bytes(raw.clone());
            }
            let takes_length = command
                .arguments
                .iter()
                .any(|(name, _)| *name == DATA_LENGTH_ARGUMENT);
            let length_override = command.transferless
                && !takes_length
                && command.declared_data_length().is_none();
            if length_override {
                args = args.data_length(16);
            }

            let built = command
                .build(&args)
                .unwrap_or_else(|err| panic!("{command} did not build: {err}"));
            let incoming = registry.parse_incoming(&built.packet).unwrap();
            assert!(std::ptr::eq(incoming.command, command), "{command}");
            assert_eq!(incoming.data_length, built.data_length, "{command}");

            let decoded = command.decode_arguments(&incoming.arguments).unwrap();
            assert_eq!(decoded, supplied, "{command}");

            // Decoded values build the same packet and transfer again.
            let mut again = Arguments::new();
            for (name, value) in decoded {
                again.insert(name, value);
            }
            match (command.transfer, &raw_transfer) {
                (_, Some(raw)) => again = again.transfer_bytes(raw.clone()),
                (Some(fields), None) if !command.transferless => {
                    let transfer = built.transfer.clone().unwrap_or_default();
                    for (name, value) in decode_fields(fields, &transfer) {
                        again.insert(name, value);
                    }
                }
                _ => {}
            }
            if length_override {
                again = again.data_length(16);
            }
            let rebuilt = command.build(&again).unwrap();
            assert_eq!(rebuilt, built, "{command}");
        }
    }
}
