#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn bandwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bandwire"))
        .args(["--log-level", "error", "--format", "json"])
        .args(args)
        .output()
        .expect("bandwire should run")
}

fn json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be json")
}

#[test]
fn commands_lists_the_catalog() {
    let output = bandwire(&["commands"]);
    assert!(output.status.success());
    let listed = json(&output);
    let entries = listed.as_array().expect("commands should be an array");
    assert!(entries.len() > 100);
    assert!(entries
        .iter()
        .any(|c| c["name"] == "CoreModuleGetApiVersion" && c["raw_code"] == "0x7686"));
}

#[test]
fn commands_filter_narrows_the_list() {
    let output = bandwire(&["commands", "--filter", "getapiversion"]);
    assert!(output.status.success());
    let listed = json(&output);
    let entries = listed.as_array().expect("commands should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["data_length"], 4);
}

#[test]
fn decode_command_resolves_the_packet() {
    let output = bandwire(&["decode-command", "F9 2E 86 76 04 00 00 00"]);
    assert!(output.status.success());
    let decoded = json(&output);
    assert_eq!(decoded["command"], "CoreModuleGetApiVersion");
    assert_eq!(decoded["transferless"], true);
    assert_eq!(decoded["data_length"], 4);
}

#[test]
fn decode_command_with_bad_magic_is_data_invalid() {
    let output = bandwire(&["decode-command", "00 00 86 76 04 00 00 00"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn decode_status_names_catalogued_statuses() {
    let output = bandwire(&["decode-status", "FEA6000020A0"]);
    assert!(output.status.success());
    let status = json(&output);
    assert_eq!(status["name"], "DmaChannelBusy");
    assert_eq!(status["customer"], true);
    assert_eq!(status["failure"], true);
}

#[test]
fn decode_status_keeps_unknown_statuses() {
    let output = bandwire(&["decode-status", "fea6 3412 2100"]);
    assert!(output.status.success());
    let status = json(&output);
    assert_eq!(status["name"], serde_json::Value::Null);
    assert_eq!(status["code"], 0x1234);
    assert_eq!(status["facility_value"], 0x21);
}

#[test]
fn decode_status_rejects_wrong_length() {
    let output = bandwire(&["decode-status", "fea6"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_bandwire"))
        .arg("version")
        .output()
        .expect("version should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
