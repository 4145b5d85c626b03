//! Error and usage rendering.
//!
//! This is the only place a failure becomes user-visible text. Nothing here
//! exits the process; `main` turns the returned code into the exit status.

use std::process::ExitCode;

use crate::args::FlagSet;

/// Text printed between the error message and the flag listing.
pub const USAGE_PREFIX: &str =
    "Usage:\ntemplar [<flag1> <flag2>...] --srcs <templateFile1>,<templateFile2>,...\n";

const COLUMN_GAP: &str = " : ";

/// Render one row per declared flag: name and metavariable padded to a
/// common column, then the description wrapped to `width`.
pub fn render_usage(flags: &FlagSet, width: usize) -> String {
    let heads: Vec<String> = flags
        .iter()
        .map(|def| match def.arity.metavar() {
            Some(metavar) => format!(" {} {}", def.name, metavar),
            None => format!(" {}", def.name),
        })
        .collect();
    let column = heads.iter().map(String::len).max().unwrap_or(0);
    let indent = column + COLUMN_GAP.len();
    let text_width = width.saturating_sub(indent).max(20);

    let mut out = String::new();
    for (head, def) in heads.iter().zip(flags.iter()) {
        let mut lines = wrap(def.description, text_width).into_iter();
        out.push_str(&format!("{:<column$}{}", head, COLUMN_GAP));
        out.push_str(&lines.next().unwrap_or_default());
        out.push('\n');
        for line in lines {
            out.push_str(&" ".repeat(indent));
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Full failure text: the error, the usage prefix, then the flag listing.
pub fn render_failure(message: &str, usage_prefix: &str, flags: &FlagSet, width: usize) -> String {
    format!(
        "\nError: {}\n\n\n{}\n{}",
        message,
        usage_prefix,
        render_usage(flags, width)
    )
}

/// Print the failure to stderr and return the failing exit code.
///
/// Only the binary's entry point calls this.
pub fn exit_with_error(
    message: &str,
    usage_prefix: &str,
    flags: &FlagSet,
    width: usize,
) -> ExitCode {
    eprint!("{}", render_failure(message, usage_prefix, flags, width));
    ExitCode::FAILURE
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
