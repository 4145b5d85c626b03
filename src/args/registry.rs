//! Flag registry: single source of truth for all compiler flags.

use crate::args::value::ParsedValue;

/// Parses one raw item (a list element or a value flag's operand) into its
/// stored form. The error is a human-readable reason.
pub type ItemParser = fn(&str) -> Result<String, String>;

/// How many tokens a flag consumes and how they are interpreted.
#[derive(Clone, Copy)]
pub enum FlagArity {
    /// Boolean flag. Bare means true; an explicit true/false/1/0 may follow.
    Toggle,
    /// Requires exactly one operand (e.g., --input-prefix <PATH>).
    Value(ItemParser),
    /// Requires exactly one operand, split on commas (e.g., --srcs a,b,c).
    List(ItemParser),
}

impl std::fmt::Debug for FlagArity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagArity::Toggle => write!(f, "Toggle"),
            FlagArity::Value(_) => write!(f, "Value"),
            FlagArity::List(_) => write!(f, "List"),
        }
    }
}

impl FlagArity {
    /// Placeholder shown next to the flag name in usage text.
    pub fn metavar(&self) -> Option<&'static str> {
        match self {
            FlagArity::Toggle => None,
            FlagArity::Value(_) => Some("VAL"),
            FlagArity::List(_) => Some("ITEM,ITEM,..."),
        }
    }
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Long form including the leading dashes (e.g., "--srcs").
    pub name: &'static str,
    /// How the flag's operand is consumed.
    pub arity: FlagArity,
    /// Value recorded when the flag never appears on the command line.
    pub default: ParsedValue,
    /// Human-readable description for usage text.
    pub description: &'static str,
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.name
    }

    /// Name without the leading dashes, as used for config keys.
    pub fn key(&self) -> &'static str {
        self.name.trim_start_matches('-')
    }
}

/// The declared flags of one program, in declaration order.
///
/// Built once at startup. Parsing only ever borrows it, so one set can serve
/// any number of concurrent parses.
#[derive(Debug, Clone)]
pub struct FlagSet {
    flags: Vec<FlagDef>,
}

impl FlagSet {
    pub fn new(flags: Vec<FlagDef>) -> Self {
        Self { flags }
    }

    /// Look up a flag by its exact name.
    pub fn find(&self, arg: &str) -> Option<&FlagDef> {
        self.flags.iter().find(|def| def.matches(arg))
    }

    /// Look up a flag by its config key (name without dashes).
    pub fn find_by_key(&self, key: &str) -> Option<&FlagDef> {
        self.flags.iter().find(|def| def.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlagDef> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Replace the declared default of `name`. Returns false if no such flag.
    pub fn set_default(&mut self, name: &str, value: ParsedValue) -> bool {
        match self.flags.iter_mut().find(|def| def.matches(name)) {
            Some(def) => {
                def.default = value;
                true
            }
            None => false,
        }
    }
}

/// Flag names shared by the parser, classifier and plugin stages.
pub mod names {
    pub const SRCS: &str = "--srcs";
    pub const DEPS: &str = "--deps";
    pub const INDIRECT_DEPS: &str = "--indirect-deps";
    pub const INPUT_PREFIX: &str = "--input-prefix";
    pub const OUTPUT_PATH_FORMAT: &str = "--output-path-format";
    pub const MESSAGE_PLUGIN: &str = "--message-plugin";
    pub const PLUGINS: &str = "--plugins";
    pub const LOCALES: &str = "--locales";
    pub const GENERATE_JSDOC: &str = "--generate-jsdoc";
    pub const USE_IJ_DATA: &str = "--use-ij-data";
    pub const PROVIDE_REQUIRE_NAMESPACES: &str = "--provide-require-namespaces";
}

/// Item parser that keeps the raw text unchanged.
pub fn parse_identity(item: &str) -> Result<String, String> {
    Ok(item.to_string())
}

/// Item parser for locale tags such as `en`, `pt-BR` or `zh_Hant`.
///
/// Underscores are normalized to dashes.
pub fn parse_locale(item: &str) -> Result<String, String> {
    if item.is_empty() {
        return Err("locale must not be empty".to_string());
    }
    if let Some(bad) = item
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!("unexpected character '{}' in locale", bad));
    }
    Ok(item.replace('_', "-"))
}

/// Build the complete flag registry for the compiler.
pub fn compiler_flags() -> FlagSet {
    FlagSet::new(vec![
        // === Input files ===
        FlagDef {
            name: names::SRCS,
            arity: FlagArity::List(parse_identity),
            default: ParsedValue::List(Vec::new()),
            description: "The list of source template files to compile.",
        },
        FlagDef {
            name: names::DEPS,
            arity: FlagArity::List(parse_identity),
            default: ParsedValue::List(Vec::new()),
            description: "The list of template files the sources depend on directly. \
                          Dependencies are parsed and checked but not compiled.",
        },
        FlagDef {
            name: names::INDIRECT_DEPS,
            arity: FlagArity::List(parse_identity),
            default: ParsedValue::List(Vec::new()),
            description: "Template files required by dependencies but not by the sources \
                          themselves. Only their signatures are checked.",
        },
        FlagDef {
            name: names::INPUT_PREFIX,
            arity: FlagArity::Value(parse_identity),
            default: ParsedValue::Text(String::new()),
            description: "Prefix prepended to every input file path given in --srcs, \
                          --deps, --indirect-deps and positional arguments.",
        },
        // === Output ===
        FlagDef {
            name: names::OUTPUT_PATH_FORMAT,
            arity: FlagArity::Value(parse_identity),
            default: ParsedValue::Text(String::new()),
            description: "Format string for output file paths. May use the placeholders \
                          {INPUT_PREFIX}, {INPUT_DIRECTORY}, {INPUT_FILE_NAME}, \
                          {INPUT_FILE_NAME_NO_EXT} and {LOCALE}.",
        },
        FlagDef {
            name: names::LOCALES,
            arity: FlagArity::List(parse_locale),
            default: ParsedValue::List(Vec::new()),
            description: "Locales to generate output for, one output file per locale.",
        },
        // === Plugin wiring ===
        FlagDef {
            name: names::MESSAGE_PLUGIN,
            arity: FlagArity::Value(parse_identity),
            default: ParsedValue::Text("xliff".to_string()),
            description: "Name of the message plugin module that reads translated messages.",
        },
        FlagDef {
            name: names::PLUGINS,
            arity: FlagArity::List(parse_identity),
            default: ParsedValue::List(Vec::new()),
            description: "Names of additional plugin modules to install, in order.",
        },
        // === Code generation toggles ===
        FlagDef {
            name: names::GENERATE_JSDOC,
            arity: FlagArity::Toggle,
            default: ParsedValue::Bool(false),
            description: "Whether to generate JSDoc comments for the generated code.",
        },
        FlagDef {
            name: names::USE_IJ_DATA,
            arity: FlagArity::Toggle,
            default: ParsedValue::Bool(false),
            description: "Whether the generated templates accept injected data.",
        },
        FlagDef {
            name: names::PROVIDE_REQUIRE_NAMESPACES,
            arity: FlagArity::Toggle,
            default: ParsedValue::Bool(false),
            description: "Whether to emit provide/require statements for template namespaces.",
        },
    ])
}
