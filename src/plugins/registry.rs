//! Plugin registry: name → factory for every built-in module.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Name of the module installed first in every pipeline.
pub const CORE_PLUGIN: &str = "core";

/// Errors that can occur while resolving plugin modules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error("a message plugin is required (--message-plugin)")]
    MissingMessagePlugin,

    #[error("Cannot find plugin module \"{name}\"")]
    NotFound { name: String },

    #[error("plugin module \"{name}\" is a {actual} plugin, expected a {expected} plugin")]
    WrongRole {
        name: String,
        expected: PluginRole,
        actual: PluginRole,
    },
}

/// What a plugin module contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginRole {
    /// The always-present base module.
    Core,
    /// Provides the translated message format.
    Message,
    /// Adds template functions.
    Functions,
}

impl std::fmt::Display for PluginRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginRole::Core => write!(f, "core"),
            PluginRole::Message => write!(f, "message"),
            PluginRole::Functions => write!(f, "functions"),
        }
    }
}

/// Everything the installed modules registered, handed to the compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bindings {
    pub message_format: Option<String>,
    pub functions: BTreeSet<String>,
}

/// A live plugin module.
pub trait PluginModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Register this module's contributions.
    fn install(&self, bindings: &mut Bindings);
}

/// A registry entry.
#[derive(Debug, Clone, Copy)]
pub struct PluginDef {
    pub name: &'static str,
    pub role: PluginRole,
    pub factory: fn() -> Box<dyn PluginModule>,
}

struct FunctionsModule {
    name: &'static str,
    functions: &'static [&'static str],
}

impl PluginModule for FunctionsModule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn install(&self, bindings: &mut Bindings) {
        bindings
            .functions
            .extend(self.functions.iter().map(|f| f.to_string()));
    }
}

struct MessageModule {
    name: &'static str,
    format: &'static str,
}

impl PluginModule for MessageModule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn install(&self, bindings: &mut Bindings) {
        bindings.message_format = Some(self.format.to_string());
    }
}

fn core_module() -> Box<dyn PluginModule> {
    Box::new(FunctionsModule {
        name: CORE_PLUGIN,
        functions: &[
            "ceiling", "floor", "isFirst", "isLast", "index", "keys", "length", "max", "min",
            "randomInt", "round",
        ],
    })
}

fn xliff_module() -> Box<dyn PluginModule> {
    Box::new(MessageModule {
        name: "xliff",
        format: "xliff",
    })
}

fn source_messages_module() -> Box<dyn PluginModule> {
    Box::new(MessageModule {
        name: "source-messages",
        format: "source",
    })
}

fn bidi_module() -> Box<dyn PluginModule> {
    Box::new(FunctionsModule {
        name: "bidi",
        functions: &[
            "bidiDirAttr",
            "bidiEndEdge",
            "bidiGlobalDir",
            "bidiMark",
            "bidiMarkAfter",
            "bidiStartEdge",
            "bidiTextDir",
        ],
    })
}

fn strings_module() -> Box<dyn PluginModule> {
    Box::new(FunctionsModule {
        name: "strings",
        functions: &["strContains", "strIndexOf", "strLen", "strSub"],
    })
}

/// Build the complete plugin registry.
pub fn plugin_registry() -> &'static [PluginDef] {
    const REGISTRY: &[PluginDef] = &[
        PluginDef {
            name: CORE_PLUGIN,
            role: PluginRole::Core,
            factory: core_module,
        },
        PluginDef {
            name: "xliff",
            role: PluginRole::Message,
            factory: xliff_module,
        },
        PluginDef {
            name: "source-messages",
            role: PluginRole::Message,
            factory: source_messages_module,
        },
        PluginDef {
            name: "bidi",
            role: PluginRole::Functions,
            factory: bidi_module,
        },
        PluginDef {
            name: "strings",
            role: PluginRole::Functions,
            factory: strings_module,
        },
    ];
    REGISTRY
}

/// Look up a registry entry by name.
pub fn find_plugin(name: &str) -> Result<&'static PluginDef, PluginError> {
    plugin_registry()
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| PluginError::NotFound {
            name: name.to_string(),
        })
}

/// The instantiated modules, in installation order.
pub struct PluginPipeline {
    modules: Vec<Box<dyn PluginModule>>,
}

impl PluginPipeline {
    pub fn names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|module| module.name()).collect()
    }

    /// Install every module in order; later modules may override earlier ones.
    pub fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::default();
        for module in &self.modules {
            module.install(&mut bindings);
        }
        bindings
    }
}

impl std::fmt::Debug for PluginPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginPipeline")
            .field("modules", &self.names())
            .finish()
    }
}

/// Instantiate the core module, the message plugin, then `plugin_names` in
/// order.
///
/// A plugin list made of a single empty item (`--plugins ""`) means no
/// additional plugins.
pub fn create_pipeline(
    message_plugin: &str,
    plugin_names: &[String],
) -> Result<PluginPipeline, PluginError> {
    if message_plugin.is_empty() {
        return Err(PluginError::MissingMessagePlugin);
    }

    let mut modules = vec![(find_plugin(CORE_PLUGIN)?.factory)()];

    let message = find_plugin(message_plugin)?;
    if message.role != PluginRole::Message {
        return Err(PluginError::WrongRole {
            name: message.name.to_string(),
            expected: PluginRole::Message,
            actual: message.role,
        });
    }
    modules.push((message.factory)());

    let extra: &[String] = match plugin_names {
        [only] if only.is_empty() => &[],
        names => names,
    };
    for name in extra {
        modules.push((find_plugin(name)?.factory)());
    }

    let pipeline = PluginPipeline { modules };
    debug!(modules = ?pipeline.names(), "created plugin pipeline");
    Ok(pipeline)
}
