use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default flag values keyed by flag name without dashes
    /// (e.g., `input-prefix = "templates/"`).
    #[serde(default)]
    pub defaults: BTreeMap<String, toml::Value>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for user-facing output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Column at which usage text wraps (default: 100).
    #[serde(default = "default_usage_width")]
    pub usage_width: usize,
}

/// Settings for diagnostic logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter level used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Narrowest usage width the renderer accepts.
pub(crate) const MIN_USAGE_WIDTH: usize = 40;

pub(crate) const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

fn default_usage_width() -> usize {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            usage_width: default_usage_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
