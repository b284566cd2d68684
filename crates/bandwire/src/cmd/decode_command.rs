use bandwire_frame::Value;
use bandwire_registry::CommandRegistry;
use serde::Serialize;
use tracing::warn;

use crate::cmd::{parse_hex, DecodeCommandArgs};
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_fields, print_json, print_pretty, print_raw, OutputFormat};

#[derive(Debug, Serialize)]
struct DecodedCommand {
    command: String,
    raw_code: String,
    facility: String,
    code: u8,
    transferless: bool,
    data_length: u32,
    /// Arguments decoded against the command's layout, when they fit it.
    arguments: Option<Value>,
    raw_arguments: String,
}

impl DecodedCommand {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("command", self.command.clone()),
            ("raw_code", self.raw_code.clone()),
            ("facility", self.facility.clone()),
            ("code", self.code.to_string()),
            ("transferless", self.transferless.to_string()),
            ("data_length", self.data_length.to_string()),
        ];
        if let Some(arguments) = &self.arguments {
            rows.push(("arguments", arguments.to_string()));
        }
        rows.push(("raw_arguments", self.raw_arguments.clone()));
        rows
    }
}

pub fn run(args: DecodeCommandArgs, format: OutputFormat) -> CliResult<i32> {
    let packet = parse_hex(&args.hex)?;
    let registry =
        CommandRegistry::builtin().map_err(|err| registry_error("catalog failed to load", err))?;
    let incoming = registry
        .parse_incoming(&packet)
        .map_err(|err| registry_error("decode failed", err))?;
    let command = incoming.command;

    let arguments = match command.decode_arguments(&incoming.arguments) {
        Ok(values) => Some(Value::Record(values)),
        Err(err) => {
            warn!(%command, error = %err, "arguments do not match the declared layout");
            None
        }
    };

    let decoded = DecodedCommand {
        command: command.to_string(),
        raw_code: format!("{:#06X}", command.raw_code()),
        facility: command.facility.to_string(),
        code: command.code,
        transferless: command.transferless,
        data_length: incoming.data_length,
        arguments,
        raw_arguments: hex::encode(&incoming.arguments),
    };

    match format {
        OutputFormat::Json => print_json(&decoded),
        OutputFormat::Table => print_fields(&decoded.rows()),
        OutputFormat::Pretty => print_pretty(&decoded.rows()),
        OutputFormat::Raw => print_raw(&incoming.arguments),
    }
    Ok(SUCCESS)
}
