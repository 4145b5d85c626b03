//! Optional TOML configuration.
//!
//! Supplies default flag values, usage width and log level. The command line
//! always wins over anything set here.

mod defaults;
mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, OutputConfig};
