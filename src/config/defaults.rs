//! Config `[defaults]` → declared flag defaults.

use crate::args::{split_items, FlagArity, FlagDef, FlagSet, ItemParser, ParsedValue};
use crate::config::loader::ConfigError;
use crate::config::types::Config;

impl Config {
    /// Override the declared defaults of `flags` with the `[defaults]` table.
    ///
    /// Values go through the same item parsers as command-line operands.
    /// Must run before any parse; the flag set is read-only afterwards.
    pub fn apply_flag_defaults(&self, flags: &mut FlagSet) -> Result<(), ConfigError> {
        for (key, raw) in &self.defaults {
            let def = flags.find_by_key(key).ok_or_else(|| ConfigError::ValidationError {
                message: format!("Unknown flag '{}' in [defaults]", key),
            })?;
            let value = convert(def, raw)?;
            let name = def.name;
            flags.set_default(name, value);
        }
        Ok(())
    }
}

fn convert(def: &FlagDef, raw: &toml::Value) -> Result<ParsedValue, ConfigError> {
    match (def.arity, raw) {
        (FlagArity::Toggle, toml::Value::Boolean(value)) => Ok(ParsedValue::Bool(*value)),
        (FlagArity::Value(parser), toml::Value::String(value)) => {
            parse(def, parser, value).map(ParsedValue::Text)
        }
        (FlagArity::List(parser), toml::Value::String(value)) => split_items(value)
            .into_iter()
            .map(|item| parse(def, parser, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ParsedValue::List),
        (FlagArity::List(parser), toml::Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                toml::Value::String(item) => parse(def, parser, item),
                other => Err(mismatch(def, other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ParsedValue::List),
        (_, other) => Err(mismatch(def, other)),
    }
}

fn parse(def: &FlagDef, parser: ItemParser, item: &str) -> Result<String, ConfigError> {
    parser(item).map_err(|reason| ConfigError::ValidationError {
        message: format!("Invalid default '{}' for '{}': {}", item, def.key(), reason),
    })
}

fn mismatch(def: &FlagDef, found: &toml::Value) -> ConfigError {
    let expected = match def.arity {
        FlagArity::Toggle => "a boolean",
        FlagArity::Value(_) => "a string",
        FlagArity::List(_) => "a string or an array of strings",
    };
    ConfigError::ValidationError {
        message: format!(
            "Default for '{}' must be {}, found {}",
            def.key(),
            expected,
            found.type_str()
        ),
    }
}
