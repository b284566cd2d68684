use bandwire_frame::{Arguments, Command, Value};
use bandwire_registry::{CommandKey, CommandRegistry};
use bandwire_session::Response;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::cmd::device::DeviceSession;
use crate::cmd::{parse_hex, runtime, ExecArgs};
use crate::exit::{frame_error, registry_error, CliError, CliResult, DEVICE_FAILURE, SUCCESS};
use crate::output::{print_fields, print_json, print_pretty, print_raw, OutputFormat, StatusOutput};

#[derive(Debug, Serialize)]
struct ExecOutput<'a> {
    command: String,
    raw_code: String,
    /// `status`, `parsed`, `failed` or `raw`.
    kind: &'static str,
    status: StatusOutput,
    value: Option<&'a Value>,
    raw: Option<String>,
}

impl<'a> ExecOutput<'a> {
    fn new(command: &Command, response: &'a Response) -> Self {
        let kind = match response {
            Response::Status(_) => "status",
            Response::Parsed { .. } => "parsed",
            Response::Failed { .. } => "failed",
            Response::Raw { .. } => "raw",
        };
        Self {
            command: command.to_string(),
            raw_code: format!("{:#06X}", command.raw_code()),
            kind,
            status: StatusOutput::from(response.status()),
            value: response.value(),
            raw: response.raw().map(hex::encode),
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("command", self.command.clone()),
            ("raw_code", self.raw_code.clone()),
            ("kind", self.kind.to_string()),
        ];
        rows.extend(self.status.rows());
        if let Some(value) = self.value {
            rows.push(("value", value.to_string()));
        }
        if let Some(raw) = &self.raw {
            rows.push(("raw", raw.clone()));
        }
        rows
    }
}

pub fn run(args: ExecArgs, format: OutputFormat) -> CliResult<i32> {
    let registry =
        CommandRegistry::builtin().map_err(|err| registry_error("catalog failed to load", err))?;
    let command = registry
        .lookup(command_key(&args.command)?)
        .map_err(|err| registry_error("lookup failed", err))?;
    let arguments = build_arguments(command, &args)?;

    let response = runtime()?.block_on(async {
        let device = DeviceSession::open(&args.transport, registry.clone()).await?;
        device.execute(command, &arguments).await
    })?;
    info!(%command, status = %response.status(), "command complete");

    let out = ExecOutput::new(command, &response);
    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_fields(&out.rows()),
        OutputFormat::Pretty => print_pretty(&out.rows()),
        OutputFormat::Raw => match &response {
            Response::Failed { raw, .. } | Response::Raw { bytes: raw, .. } => print_raw(raw),
            Response::Parsed { value, .. } => println!("{value}"),
            Response::Status(status) => println!("{status}"),
        },
    }

    if response.is_failure() {
        Ok(DEVICE_FAILURE)
    } else {
        Ok(SUCCESS)
    }
}

/// A name, or a raw 2-byte code written as `0x` hex.
fn command_key(text: &str) -> CliResult<CommandKey<'_>> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u16::from_str_radix(digits, 16)
            .map(CommandKey::Code)
            .map_err(|err| CliError::usage(format!("invalid command code {text}: {err}"))),
        None => Ok(CommandKey::Name(text)),
    }
}

fn build_arguments(command: &Command, args: &ExecArgs) -> CliResult<Arguments> {
    let mut arguments = Arguments::new();
    for pair in &args.args {
        let (name, text) = pair
            .split_once('=')
            .ok_or_else(|| CliError::usage(format!("--arg expects NAME=VALUE, got {pair:?}")))?;
        let field = command
            .arguments
            .iter()
            .chain(command.transfer.unwrap_or(&[]).iter())
            .find(|(declared, _)| *declared == name)
            .map(|(_, field)| field)
            .ok_or_else(|| CliError::usage(format!("{command} declares no field {name}")))?;
        let value = field
            .parse_value(name, text)
            .map_err(|err| frame_error("invalid argument", err))?;
        arguments.insert(name, value);
    }
    if let Some(transfer) = &args.transfer {
        arguments = arguments.transfer_bytes(Bytes::from(parse_hex(transfer)?));
    }
    if let Some(length) = args.data_length {
        arguments = arguments.data_length(length);
    }
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use bandwire_frame::{Facility, Severity, Status};
    use bandwire_registry::catalog;
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        exec: ExecArgs,
    }

    fn exec_args(argv: &[&str]) -> ExecArgs {
        let mut full = vec!["exec"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().exec
    }

    #[test]
    fn command_key_accepts_names_and_codes() {
        assert!(matches!(command_key("0x7686").unwrap(), CommandKey::Code(0x7686)));
        assert!(matches!(command_key("Foo").unwrap(), CommandKey::Name("Foo")));
        assert!(command_key("0xZZ").is_err());
    }

    #[test]
    fn undeclared_argument_is_usage_error() {
        let args = exec_args(&["CoreModuleGetApiVersion", "--arg", "Bogus=1"]);
        let err = build_arguments(&catalog::CORE_MODULE_GET_API_VERSION, &args).unwrap_err();
        assert_eq!(err.code, crate::exit::USAGE);
    }

    #[test]
    fn data_length_override_is_carried() {
        let args = exec_args(&["CoreModuleGetApiVersion", "--data-length", "9"]);
        let arguments = build_arguments(&catalog::CORE_MODULE_GET_API_VERSION, &args).unwrap();
        let built = catalog::CORE_MODULE_GET_API_VERSION.build(&arguments).unwrap();
        assert_eq!(built.data_length, 9);
    }

    #[test]
    fn transfer_on_transferless_command_is_rejected_by_build() {
        let args = exec_args(&["CoreModuleGetApiVersion", "--transfer", "0102"]);
        let arguments = build_arguments(&catalog::CORE_MODULE_GET_API_VERSION, &args).unwrap();
        assert!(catalog::CORE_MODULE_GET_API_VERSION.build(&arguments).is_err());
    }

    #[test]
    fn failed_output_carries_hex_payload() {
        let status = Status::new(true, Severity::Error, Facility::DRIVER_DMA, 0);
        let response = Response::Failed {
            raw: Bytes::from_static(&[0xDE, 0xAD]),
            status,
        };
        let out = ExecOutput::new(&catalog::CORE_MODULE_GET_API_VERSION, &response);
        assert_eq!(out.kind, "failed");
        assert_eq!(out.raw.as_deref(), Some("dead"));
        assert!(out.value.is_none());
        assert!(out.status.failure);
    }
}
