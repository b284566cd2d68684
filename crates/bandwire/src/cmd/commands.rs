use bandwire_frame::{Command, Facility, ResponseLayout};
use bandwire_registry::CommandRegistry;
use serde::Serialize;

use crate::cmd::CommandsArgs;
use crate::exit::{registry_error, CliError, CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Debug, Serialize)]
struct CommandOutput {
    name: String,
    raw_code: String,
    facility: String,
    code: u8,
    transferless: bool,
    data_length: Option<u32>,
    arguments: Vec<&'static str>,
    transfer: Option<Vec<&'static str>>,
    response: &'static str,
}

impl From<&Command> for CommandOutput {
    fn from(command: &Command) -> Self {
        Self {
            name: command.to_string(),
            raw_code: format!("{:#06X}", command.raw_code()),
            facility: command.facility.to_string(),
            code: command.code,
            transferless: command.transferless,
            data_length: command.declared_data_length(),
            arguments: command.arguments.iter().map(|(name, _)| *name).collect(),
            transfer: command
                .transfer
                .map(|fields| fields.iter().map(|(name, _)| *name).collect()),
            response: match command.response {
                ResponseLayout::Unspecified => "raw",
                ResponseLayout::StatusOnly => "status",
                ResponseLayout::Layout(_) => "layout",
            },
        }
    }
}

pub fn run(args: CommandsArgs, format: OutputFormat) -> CliResult<i32> {
    let registry =
        CommandRegistry::builtin().map_err(|err| registry_error("catalog failed to load", err))?;
    let facility = args.facility.as_deref().map(parse_facility).transpose()?;
    let filter = args.filter.map(|text| text.to_ascii_lowercase());

    let commands: Vec<CommandOutput> = registry
        .iter()
        .filter(|command| facility.is_none_or(|facility| command.facility == facility))
        .filter(|command| match &filter {
            Some(text) => command
                .name
                .is_some_and(|name| name.to_ascii_lowercase().contains(text.as_str())),
            None => true,
        })
        .map(CommandOutput::from)
        .collect();

    match format {
        OutputFormat::Json => print_json(&commands),
        OutputFormat::Table => print_table(
            &["NAME", "CODE", "FACILITY", "TRANSFER", "LENGTH", "RESPONSE"],
            commands.iter().map(|c| {
                vec![
                    c.name.clone(),
                    c.raw_code.clone(),
                    c.facility.clone(),
                    (!c.transferless).to_string(),
                    c.data_length.map(|n| n.to_string()).unwrap_or_default(),
                    c.response.to_string(),
                ]
            }),
        ),
        OutputFormat::Pretty | OutputFormat::Raw => {
            for c in &commands {
                println!("{} {}", c.raw_code, c.name);
            }
        }
    }
    Ok(SUCCESS)
}

fn parse_facility(text: &str) -> CliResult<Facility> {
    if let Some(facility) = Facility::from_name(text) {
        return Ok(facility);
    }
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u8::from_str_radix(digits, 16).ok(),
        None => text.parse().ok(),
    };
    value
        .map(Facility::from)
        .ok_or_else(|| CliError::usage(format!("unknown facility: {text}")))
}

#[cfg(test)]
mod tests {
    use bandwire_registry::catalog;

    use super::*;

    #[test]
    fn output_for_api_version_query() {
        let out = CommandOutput::from(&catalog::CORE_MODULE_GET_API_VERSION);
        assert_eq!(out.name, "CoreModuleGetApiVersion");
        assert_eq!(out.raw_code, "0x7686");
        assert!(out.transferless);
        assert_eq!(out.data_length, Some(4));
        assert_eq!(out.response, "layout");
    }

    #[test]
    fn facility_by_number_or_name() {
        assert_eq!(parse_facility("0x76").unwrap(), Facility::from(0x76));
        assert_eq!(parse_facility("118").unwrap(), Facility::from(0x76));
        assert!(parse_facility("NotAFacility").is_err());
    }
}
