use std::time::Duration;

use clap::{Args, Subcommand, ValueEnum};

use crate::exit::{CliError, CliResult};
use crate::output::OutputFormat;

pub mod commands;
pub mod decode_command;
pub mod decode_status;
pub mod device;
pub mod exec;
pub mod info;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in command catalog.
    Commands(CommandsArgs),
    /// Decode a hex-encoded command packet.
    DecodeCommand(DecodeCommandArgs),
    /// Decode a hex-encoded 6-byte status packet.
    DecodeStatus(DecodeStatusArgs),
    /// Execute one command against a device.
    Exec(ExecArgs),
    /// Identify the device family and print its constants.
    Info(InfoArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Commands(args) => commands::run(args, format),
        Command::DecodeCommand(args) => decode_command::run(args, format),
        Command::DecodeStatus(args) => decode_status::run(args, format),
        Command::Exec(args) => exec::run(args, format),
        Command::Info(args) => info::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CommandsArgs {
    /// Only commands whose name contains this text (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,
    /// Only commands addressed to this facility (name or number).
    #[arg(long)]
    pub facility: Option<String>,
}

#[derive(Args, Debug)]
pub struct DecodeCommandArgs {
    /// Packet bytes as hex (whitespace, `:` and a `0x` prefix are ignored).
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct DecodeStatusArgs {
    /// Status bytes as hex.
    pub hex: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// Loopback with a canned status; no hardware.
    Mock,
    /// USB bulk endpoints.
    Usb,
    /// Bluetooth Classic RFCOMM.
    Classic,
    /// Bluetooth LE through the Zippy service.
    Ble,
}

impl TransportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Usb => "usb",
            Self::Classic => "classic",
            Self::Ble => "ble",
        }
    }
}

/// How to reach the device.
#[derive(Args, Debug, Clone)]
pub struct TransportArgs {
    /// Transport to use.
    #[arg(long, value_enum, default_value = "mock")]
    pub transport: TransportKind,
    /// Bluetooth address (classic, ble) or peripheral id (ble).
    #[arg(long)]
    pub device: Option<String>,
    /// RFCOMM channel for the classic transport.
    #[arg(long, default_value_t = bandwire_transport::classic::DEFAULT_CHANNEL)]
    pub rfcomm_channel: u8,
    /// USB vendor id (decimal or 0x hex).
    #[arg(long, value_parser = parse_u16)]
    pub vendor_id: Option<u16>,
    /// USB product id (decimal or 0x hex).
    #[arg(long, value_parser = parse_u16)]
    pub product_id: Option<u16>,
    /// Only open the USB device with this serial number.
    #[arg(long)]
    pub serial: Option<String>,
    /// Per-command timeout (e.g. 30s, 500ms).
    #[arg(long, default_value = "30s")]
    pub timeout: String,
    /// Status the mock transport answers with (catalog name).
    #[arg(long, default_value = "Success")]
    pub mock_status: String,
    /// Payload the mock transport answers the first command with, as hex.
    #[arg(long)]
    pub mock_reply: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Command name, or its raw 2-byte code as 0x hex (e.g. 0x7686).
    pub command: String,
    /// Argument or transfer field value, NAME=VALUE. Repeatable.
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,
    /// Raw transfer payload as hex, replacing the declared transfer fields.
    #[arg(long)]
    pub transfer: Option<String>,
    /// Explicit data length override.
    #[arg(long)]
    pub data_length: Option<u32>,
    #[command(flatten)]
    pub transport: TransportArgs,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub transport: TransportArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Hex bytes, tolerating a `0x` prefix, whitespace and `:` separators.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).map_err(|err| CliError::usage(format!("invalid hex {input:?}: {err}")))
}

fn parse_u16(input: &str) -> Result<u16, String> {
    let input = input.trim();
    match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => input.parse(),
    }
    .map_err(|err| format!("{input}: {err}"))
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::usage("duration must not be empty"));
    }

    let (number, millis) = match input.strip_suffix("ms") {
        Some(number) => (number, true),
        None => (input.strip_suffix('s').unwrap_or(input), false),
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::usage(format!("invalid duration value: {input}")))?;
    if value == 0 {
        return Err(CliError::usage("duration must be greater than zero"));
    }

    Ok(if millis {
        Duration::from_millis(value)
    } else {
        Duration::from_secs(value)
    })
}

/// Runtime for the async session layer.
pub fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| crate::exit::io_error("failed to start runtime", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_tolerates_separators() {
        assert_eq!(parse_hex("0xFE A6:00").unwrap(), vec![0xFE, 0xA6, 0x00]);
        assert_eq!(parse_hex("f92e").unwrap(), vec![0xF9, 0x2E]);
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn parse_u16_accepts_hex_and_decimal() {
        assert_eq!(parse_u16("0x045E"), Ok(0x045E));
        assert_eq!(parse_u16("726"), Ok(726));
        assert!(parse_u16("0x1FFFF").is_err());
    }

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("bad").is_err());
        assert!(parse_duration("").is_err());
    }
}
