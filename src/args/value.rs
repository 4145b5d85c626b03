//! Parsed flag values.

use std::collections::BTreeMap;

use serde::Serialize;

/// The typed result for one flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl ParsedValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParsedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParsedValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParsedValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Result of a successful parse: one value per declared flag plus the
/// positional arguments in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedFlags {
    values: BTreeMap<String, ParsedValue>,
    positional: Vec<String>,
}

impl ParsedFlags {
    pub fn get(&self, name: &str) -> Option<&ParsedValue> {
        self.values.get(name)
    }

    /// Boolean value of a toggle flag; false if absent or not a toggle.
    pub fn bool(&self, name: &str) -> bool {
        self.get(name).and_then(ParsedValue::as_bool).unwrap_or(false)
    }

    /// Text of a value flag; empty if absent or not a value flag.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(ParsedValue::as_text).unwrap_or("")
    }

    /// Items of a list flag; empty if absent or not a list flag.
    pub fn list(&self, name: &str) -> &[String] {
        self.get(name).and_then(ParsedValue::as_list).unwrap_or(&[])
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Flag name → value mapping handed to later stages.
    pub fn values(&self) -> &BTreeMap<String, ParsedValue> {
        &self.values
    }

    /// Record one occurrence. Repeated lists accumulate; anything else keeps
    /// the last occurrence.
    pub(crate) fn record(&mut self, name: &str, value: ParsedValue) {
        if let ParsedValue::List(items) = &value {
            if let Some(ParsedValue::List(existing)) = self.values.get_mut(name) {
                existing.extend(items.iter().cloned());
                return;
            }
        }
        self.values.insert(name.to_string(), value);
    }

    pub(crate) fn push_positional(&mut self, arg: String) {
        self.positional.push(arg);
    }

    pub(crate) fn fill_default(&mut self, name: &str, default: &ParsedValue) {
        self.values
            .entry(name.to_string())
            .or_insert_with(|| default.clone());
    }
}
