//! Per-arity parsing rules.
//!
//! A rule sees the tokens that follow the flag and reports the value plus how
//! many of those tokens it consumed. It never advances a cursor itself.

use crate::args::error::ParseError;
use crate::args::registry::ItemParser;
use crate::args::value::ParsedValue;

/// What a rule produced for one flag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub value: ParsedValue,
    /// Tokens taken from `rest`, not counting the flag itself.
    pub consumed: usize,
}

/// Toggle rule: bare flag means true; an immediately following
/// "true"/"1"/"false"/"0" sets the value explicitly and is consumed.
///
/// Any other following token is left alone, even if a positional argument
/// was intended. Never fails.
pub fn boolean_rule(rest: &[String]) -> RuleOutcome {
    let explicit = rest.first().and_then(|next| match next.as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    });

    match explicit {
        Some(value) => RuleOutcome {
            value: ParsedValue::Bool(value),
            consumed: 1,
        },
        None => RuleOutcome {
            value: ParsedValue::Bool(true),
            consumed: 0,
        },
    }
}

/// Single-operand rule. The next token is taken whatever its shape.
pub fn value_rule(
    flag: &str,
    parser: ItemParser,
    rest: &[String],
) -> Result<RuleOutcome, ParseError> {
    let operand = operand(flag, rest)?;
    let value = parse_item(flag, parser, operand)?;
    Ok(RuleOutcome {
        value: ParsedValue::Text(value),
        consumed: 1,
    })
}

/// Split a list operand on `,`.
///
/// Leading and interior empty items survive (`,a,,b` has four items); trailing
/// empty items are dropped, so `a,` is `["a"]` and `,` is empty. An operand
/// without any comma is a single item, even when it is empty.
pub fn split_items(operand: &str) -> Vec<&str> {
    if !operand.contains(',') {
        return vec![operand];
    }
    let mut items: Vec<&str> = operand.split(',').collect();
    while items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }
    items
}

/// Comma-list rule. Items come from [`split_items`].
pub fn list_rule(
    flag: &str,
    parser: ItemParser,
    rest: &[String],
) -> Result<RuleOutcome, ParseError> {
    let operand = operand(flag, rest)?;
    let items = split_items(operand)
        .into_iter()
        .map(|item| parse_item(flag, parser, item))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RuleOutcome {
        value: ParsedValue::List(items),
        consumed: 1,
    })
}

fn operand<'a>(flag: &str, rest: &'a [String]) -> Result<&'a str, ParseError> {
    rest.first()
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingArgument {
            flag: flag.to_string(),
        })
}

fn parse_item(flag: &str, parser: ItemParser, item: &str) -> Result<String, ParseError> {
    parser(item).map_err(|reason| ParseError::InvalidValue {
        flag: flag.to_string(),
        item: item.to_string(),
        reason,
    })
}
