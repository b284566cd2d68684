use std::io::{IsTerminal, Write};

use bandwire_frame::Status;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// A status as printed by every subcommand.
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub name: Option<&'static str>,
    pub display: String,
    pub customer: bool,
    pub severity: &'static str,
    pub facility: String,
    pub facility_value: u8,
    pub code: u16,
    pub failure: bool,
}

impl From<Status> for StatusOutput {
    fn from(status: Status) -> Self {
        Self {
            name: status.name(),
            display: status.to_string(),
            customer: status.customer(),
            severity: status.severity().as_str(),
            facility: status.facility().to_string(),
            facility_value: status.facility().value(),
            code: status.code(),
            failure: status.is_failure(),
        }
    }
}

impl StatusOutput {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", self.display.clone()),
            ("customer", self.customer.to_string()),
            ("severity", self.severity.to_string()),
            (
                "facility",
                format!("{} ({:#04X})", self.facility, self.facility_value),
            ),
            ("code", self.code.to_string()),
            ("failure", self.failure.to_string()),
        ]
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_table(header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}

/// Two-column FIELD/VALUE table.
pub fn print_fields(rows: &[(&str, String)]) {
    print_table(
        &["FIELD", "VALUE"],
        rows.iter()
            .map(|(field, value)| vec![field.to_string(), value.clone()]),
    );
}

/// `field=value` pairs on one line.
pub fn print_pretty(rows: &[(&str, String)]) {
    let line = rows
        .iter()
        .map(|(field, value)| format!("{field}={value}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use bandwire_frame::{Facility, Severity};

    use super::*;

    #[test]
    fn status_output_names_known_statuses() {
        let busy = Status::new(true, Severity::Error, Facility::DRIVER_DMA, 0);
        let out = StatusOutput::from(busy);
        assert_eq!(out.name, Some("DmaChannelBusy"));
        assert!(out.failure);
        assert_eq!(out.facility_value, 0x20);
    }

    #[test]
    fn status_output_serializes_unknown_statuses() {
        let odd = Status::new(false, Severity::Null, Facility::from(0x21), 0x7777);
        let json = serde_json::to_value(StatusOutput::from(odd)).unwrap();
        assert_eq!(json["name"], serde_json::Value::Null);
        assert_eq!(json["code"], 0x7777);
        assert_eq!(json["failure"], true);
    }
}
