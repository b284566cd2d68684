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
fn exec_parses_mock_reply() {
    let output = bandwire(&[
        "exec",
        "CoreModuleGetApiVersion",
        "--mock-reply",
        "1f000000",
    ]);
    assert!(output.status.success());
    let reply = json(&output);
    assert_eq!(reply["kind"], "parsed");
    assert_eq!(reply["value"], 31);
    assert_eq!(reply["status"]["name"], "Success");
}

#[test]
fn exec_by_raw_code() {
    let output = bandwire(&["exec", "0x7686"]);
    assert!(output.status.success());
    let reply = json(&output);
    assert_eq!(reply["command"], "CoreModuleGetApiVersion");
    assert_eq!(reply["value"], 0);
}

#[test]
fn exec_failure_status_returns_raw_bytes_and_exit_2() {
    let output = bandwire(&[
        "exec",
        "CoreModuleGetApiVersion",
        "--mock-status",
        "DmaChannelBusy",
        "--mock-reply",
        "aabbccdd",
    ]);
    assert_eq!(output.status.code(), Some(2));
    let reply = json(&output);
    assert_eq!(reply["kind"], "failed");
    assert_eq!(reply["raw"], "aabbccdd");
    assert_eq!(reply["value"], serde_json::Value::Null);
}

#[test]
fn exec_unknown_command_is_usage_error() {
    let output = bandwire(&["exec", "NoSuchCommand"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NoSuchCommand"));
}

#[test]
fn exec_unknown_mock_status_is_usage_error() {
    let output = bandwire(&[
        "exec",
        "CoreModuleGetApiVersion",
        "--mock-status",
        "NotAStatus",
    ]);
    assert_eq!(output.status.code(), Some(64));
}

#[cfg(not(feature = "usb"))]
#[test]
fn exec_over_missing_transport_feature_is_usage_error() {
    let output = bandwire(&["exec", "CoreModuleGetApiVersion", "--transport", "usb"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usb transport not compiled in"));
}

#[test]
fn info_classifies_newer_devices() {
    let output = bandwire(&["info", "--mock-reply", "1f000000"]);
    assert!(output.status.success());
    let info = json(&output);
    assert_eq!(info["family"], "Envoy");
    assert_eq!(info["constants"]["me_tile_height"], 128);
    assert_eq!(info["constants"]["max_icons_per_tile"], 15);
}

#[test]
fn info_classifies_older_devices() {
    let output = bandwire(&["info", "--mock-reply", "1e000000"]);
    assert!(output.status.success());
    let info = json(&output);
    assert_eq!(info["family"], "Cargo");
    assert_eq!(info["constants"]["me_tile_height"], 102);
}
