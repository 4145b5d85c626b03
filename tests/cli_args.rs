//! Tests for the templar binary.
//!
//! Each test runs with an empty config directory so a user's own config
//! cannot change the outcome.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let config_home = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_templar"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("TEMPLAR_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_success_prints_manifest() {
    let output = run(&["--srcs", "a.tpl,b.tpl", "--deps", "b.tpl,c.tpl"]);

    assert!(output.status.success());
    let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["units"]["srcs"], serde_json::json!(["a.tpl", "b.tpl"]));
    assert_eq!(manifest["units"]["deps"], serde_json::json!(["c.tpl"]));
}

#[test]
fn test_missing_sources_exits_with_usage() {
    let output = run(&["--generate-jsdoc"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: must provide source files"));
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("--indirect-deps ITEM,ITEM,..."));
}

#[test]
fn test_unknown_flag_exits_with_usage() {
    let output = run(&["--srcs", "a.tpl", "--frobnicate"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: \"--frobnicate\" is not a valid flag"));
    assert!(stderr.contains("--message-plugin VAL"));
}

#[test]
fn test_list_flag_without_value_exits_with_usage() {
    let output = run(&["--srcs"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: flag --srcs requires one argument"));
}

#[test]
fn test_mixed_source_forms_exit_with_usage() {
    let output = run(&["--srcs", "x.tpl", "y.tpl"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("found sources from both --srcs and positional args"));
}

#[test]
fn test_config_defaults_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("templar.toml");
    std::fs::write(&config, "[defaults]\ninput-prefix = \"tpl/\"\n").unwrap();

    let output = run(&["--config", config.to_str().unwrap(), "--srcs", "a.tpl"]);

    assert!(output.status.success());
    let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["units"]["srcs"], serde_json::json!(["tpl/a.tpl"]));
}

#[test]
fn test_missing_config_file_fails() {
    let output = run(&["--config", "/nonexistent/templar.toml", "--srcs", "a.tpl"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: failed to load config"));
}

#[test]
fn test_missing_config_file_shows_usage() {
    let output = run(&["--config", "/nonexistent/templar.toml", "--srcs", "a.tpl"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("--srcs ITEM,ITEM,..."));
}

#[test]
fn test_bad_config_default_exits_with_usage() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("templar.toml");
    std::fs::write(&config, "[defaults]\nno-such-flag = true\n").unwrap();

    let output = run(&["--config", config.to_str().unwrap(), "--srcs", "a.tpl"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: invalid config defaults"));
    assert!(stderr.contains("no-such-flag"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_config_without_path_exits_with_usage() {
    let output = run(&["--config"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "));
    assert!(stderr.contains("--config"));
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("--message-plugin VAL"));
}

#[test]
fn test_leading_double_dash_makes_positional_source() {
    let output = run(&["--", "-x.tpl"]);

    assert!(output.status.success());
    let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["units"]["srcs"], serde_json::json!(["-x.tpl"]));
}

#[test]
fn test_trailing_comma_adds_no_source() {
    let output = run(&["--srcs", "a.tpl,"]);

    assert!(output.status.success());
    let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["units"]["srcs"], serde_json::json!(["a.tpl"]));
}

#[test]
fn test_help_exits_successfully() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--config"));
}
