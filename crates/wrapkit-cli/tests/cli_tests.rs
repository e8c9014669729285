// Rust guideline compliant 2026-10-16

//! End-to-end tests for the wrapkit binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn wrapkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wrapkit"))
        .args(args)
        .env_remove("WRAPKIT_SHOW_ERROR")
        .env_remove("WRAPKIT_CONTENT_TYPE")
        .env_remove("WRAPKIT_PRETTY")
        .output()
        .expect("run wrapkit")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn resolve_empty_envelope() {
    let output = wrapkit(&["resolve"]);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"code":200,"status":"success"}"#
    );
}

#[test]
fn resolve_plain_error_hides_text() {
    let output = wrapkit(&["resolve", "--error", "boom"]);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"code":500,"status":"fail","message":"Internal Server Error"}"#
    );
}

#[test]
fn resolve_reads_show_error_from_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("wrapkit.toml");
    fs::write(&config_path, "show_error = true\n").expect("write config");

    let output = wrapkit(&[
        "resolve",
        "--error",
        "boom",
        "--config",
        config_path.to_str().expect("utf-8 path"),
    ]);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"code":500,"status":"fail","message":"boom"}"#
    );
}

#[test]
fn resolve_include_prints_status_line() {
    let output = wrapkit(&["resolve", "--code", "400", "--include"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("HTTP/1.1 400 Bad Request"),
        "unexpected output:\n{}",
        stdout
    );
    assert!(stdout.contains(r#""message":"Bad Request""#));
}

#[test]
fn resolve_rejects_invalid_code() {
    let output = wrapkit(&["resolve", "--code", "42"]);
    assert!(!output.status.success());
}

#[test]
fn show_config_prints_toml() {
    let output = wrapkit(&["show-config"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("show_error = false"), "got:\n{}", stdout);
    assert!(stdout.contains("content_type = \"application/json; charset=utf-8\""));
}
