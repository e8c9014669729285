// Rust guideline compliant 2026-10-16

//! Tests for loading configuration from disk.

use std::fs;
use tempfile::TempDir;
use wrapkit_core::config::DEFAULT_CONTENT_TYPE;
use wrapkit_core::{Config, Error};

#[test]
fn test_load_without_file_uses_defaults() {
    let config = Config::load(None).expect("load defaults");
    assert_eq!(config.content_type, DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("wrapkit.toml");
    let config = Config::load(Some(&path)).expect("load defaults");
    assert_eq!(config, Config::load(None).expect("load defaults"));
}

#[test]
fn test_load_reads_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("wrapkit.toml");
    fs::write(
        &path,
        "show_error = true\npretty = true\ncontent_type = \"application/vnd.api+json\"\n",
    )
    .expect("write config");

    let config = Config::load(Some(&path)).expect("load config");
    assert!(config.show_error);
    assert!(config.pretty);
    assert_eq!(config.content_type, "application/vnd.api+json");
}

#[test]
fn test_load_rejects_invalid_toml() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("wrapkit.toml");
    fs::write(&path, "show_error = [").expect("write config");

    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_toml_round_trip() {
    let config = Config {
        show_error: true,
        pretty: false,
        content_type: "application/json".to_string(),
    };
    let text = config.to_toml_string().expect("serialize");
    assert_eq!(Config::from_toml_str(&text).expect("parse"), config);
}
