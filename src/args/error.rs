use thiserror::Error;

/// Errors raised while consuming the raw argument vector.
///
/// Parsing is fail-fast: the first of these aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A value or list flag was the last token.
    #[error("flag {flag} requires one argument")]
    MissingArgument { flag: String },

    /// The flag's item parser rejected an item or operand.
    #[error("invalid item \"{item}\" for flag {flag}: {reason}")]
    InvalidValue {
        flag: String,
        item: String,
        reason: String,
    },

    /// A flag-shaped token that is not declared.
    #[error("\"{flag}\" is not a valid flag")]
    UnknownFlag { flag: String },
}

impl ParseError {
    /// The flag or argument that caused the failure.
    pub fn flag(&self) -> &str {
        match self {
            ParseError::MissingArgument { flag }
            | ParseError::InvalidValue { flag, .. }
            | ParseError::UnknownFlag { flag } => flag,
        }
    }
}
