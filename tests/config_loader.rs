use std::io::Write;

use templar::args::{compiler_flags, names, parse_args, ParsedValue};
use templar::config::{Config, ConfigError};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.defaults.is_empty());
    assert_eq!(config.output.usage_width, 100);
    assert_eq!(config.logging.level, "warn");
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("templar/config.toml"));
}

/// Test that an empty file yields defaults for every section.
#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = Config::load_from(Some(file.path())).unwrap();

    assert_eq!(config.output.usage_width, 100);
    assert_eq!(config.logging.level, "warn");
}

/// Test that a full config file is parsed.
#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
[defaults]
input-prefix = "templates/"
plugins = ["bidi"]

[output]
usage_width = 80

[logging]
level = "debug"
"#,
    );
    let config = Config::load_from(Some(file.path())).unwrap();

    assert_eq!(config.output.usage_width, 80);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.defaults.len(), 2);
}

/// Test that an explicit path must exist.
#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    match Config::load_from(Some(missing.as_path())) {
        Err(ConfigError::ReadError { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

/// Test that malformed TOML is reported with its path.
#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[output\nusage_width = ");

    match Config::load_from(Some(file.path())) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

/// Test validation fails for a usage width too narrow to render.
#[test]
fn test_validation_fails_narrow_usage_width() {
    let file = write_config("[output]\nusage_width = 10\n");

    match Config::load_from(Some(file.path())) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("usage_width"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test validation fails for an unknown log level.
#[test]
fn test_validation_fails_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("loud"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

// =============================================================================
// FLAG DEFAULTS
// =============================================================================

fn config_with_defaults(content: &str) -> Config {
    toml::from_str(content).unwrap()
}

#[test]
fn test_defaults_apply_to_unset_flags() {
    let config = config_with_defaults(
        r#"
[defaults]
input-prefix = "templates/"
generate-jsdoc = true
locales = "en,pt_BR"
plugins = ["bidi", "strings"]
"#,
    );
    let mut flags = compiler_flags();
    config.apply_flag_defaults(&mut flags).unwrap();

    let parsed = parse_args(&[], &flags).unwrap();
    assert_eq!(parsed.text(names::INPUT_PREFIX), "templates/");
    assert!(parsed.bool(names::GENERATE_JSDOC));
    assert_eq!(parsed.list(names::LOCALES), ["en", "pt-BR"]);
    assert_eq!(parsed.list(names::PLUGINS), ["bidi", "strings"]);
}

#[test]
fn test_command_line_overrides_config_defaults() {
    let config = config_with_defaults("[defaults]\ngenerate-jsdoc = true\n");
    let mut flags = compiler_flags();
    config.apply_flag_defaults(&mut flags).unwrap();

    let args = vec!["--generate-jsdoc".to_string(), "0".to_string()];
    let parsed = parse_args(&args, &flags).unwrap();
    assert_eq!(
        parsed.get(names::GENERATE_JSDOC),
        Some(&ParsedValue::Bool(false))
    );
}

#[test]
fn test_unknown_default_key_is_rejected() {
    let config = config_with_defaults("[defaults]\nno-such-flag = true\n");
    let mut flags = compiler_flags();

    match config.apply_flag_defaults(&mut flags) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("no-such-flag"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_default_type_mismatch_is_rejected() {
    let config = config_with_defaults("[defaults]\ngenerate-jsdoc = \"yes\"\n");
    let mut flags = compiler_flags();

    match config.apply_flag_defaults(&mut flags) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("must be a boolean"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_default_items_use_flag_parser() {
    let config = config_with_defaults("[defaults]\nlocales = [\"en\", \"\"]\n");
    let mut flags = compiler_flags();

    match config.apply_flag_defaults(&mut flags) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("locales"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_string_list_default_drops_trailing_comma() {
    let config = config_with_defaults("[defaults]\nplugins = \"bidi,\"\n");
    let mut flags = compiler_flags();
    config.apply_flag_defaults(&mut flags).unwrap();

    let parsed = parse_args(&[], &flags).unwrap();
    assert_eq!(parsed.list(names::PLUGINS), ["bidi"]);
}
