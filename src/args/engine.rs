//! Flag engine: raw args → parsed flags.

use tracing::debug;

use crate::args::error::ParseError;
use crate::args::registry::{FlagArity, FlagSet};
use crate::args::rules::{boolean_rule, list_rule, value_rule};
use crate::args::value::ParsedFlags;

/// Token after which every argument is positional.
pub const END_OF_FLAGS: &str = "--";

/// Whether an undeclared token should be rejected as an unknown flag rather
/// than collected as a positional argument. A lone `-` is positional.
pub fn looks_like_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// Parse raw args against the declared flags.
///
/// Walks the vector left to right, dispatching each declared flag to its
/// rule and skipping the tokens the rule consumed. Stops at the first
/// failure. Flags that never appear get their declared default.
pub fn parse_args(raw_args: &[String], flags: &FlagSet) -> Result<ParsedFlags, ParseError> {
    let mut parsed = ParsedFlags::default();
    let mut idx = 0;

    while idx < raw_args.len() {
        let arg = &raw_args[idx];
        idx += 1;

        if arg == END_OF_FLAGS {
            for rest in &raw_args[idx..] {
                parsed.push_positional(rest.clone());
            }
            break;
        }

        let Some(def) = flags.find(arg) else {
            if looks_like_flag(arg) {
                return Err(ParseError::UnknownFlag { flag: arg.clone() });
            }
            parsed.push_positional(arg.clone());
            continue;
        };

        let rest = &raw_args[idx..];
        let outcome = match def.arity {
            FlagArity::Toggle => boolean_rule(rest),
            FlagArity::Value(parser) => value_rule(def.name, parser, rest)?,
            FlagArity::List(parser) => list_rule(def.name, parser, rest)?,
        };
        idx += outcome.consumed;
        parsed.record(def.name, outcome.value);
    }

    for def in flags.iter() {
        parsed.fill_default(def.name, &def.default);
    }

    debug!(
        flags = parsed.values().len(),
        positional = parsed.positional().len(),
        "parsed command line"
    );
    Ok(parsed)
}
