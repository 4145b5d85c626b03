//! Plugin module wiring.
//!
//! Plugin modules are looked up by name in a static registry of factory
//! functions. The pipeline always starts with the core module, followed by
//! one message plugin and any number of additional plugins.

mod registry;

pub use registry::{
    create_pipeline, find_plugin, plugin_registry, Bindings, PluginDef, PluginError, PluginModule,
    PluginPipeline, PluginRole, CORE_PLUGIN,
};
