//! Flag handling for the templar front end.
//!
//! ```text
//! Raw args → FlagEngine (one rule per declared flag) → ParsedFlags
//! ```
//!
//! Each stage is a pure function over borrowed input, so every rule can be
//! unit-tested without touching the process environment.

mod engine;
mod error;
mod registry;
mod rules;
mod value;

pub use engine::{looks_like_flag, parse_args, END_OF_FLAGS};
pub use error::ParseError;
pub use registry::{
    compiler_flags, names, parse_identity, parse_locale, FlagArity, FlagDef, FlagSet, ItemParser,
};
pub use rules::{boolean_rule, list_rule, split_items, value_rule, RuleOutcome};
pub use value::{ParsedFlags, ParsedValue};
