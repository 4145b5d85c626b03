//! templar: command-line front end for a batch template compiler.
//!
//! Turns raw process arguments into a validated compile request: typed flag
//! values, a partition of input files by kind, and the plugin modules to
//! install.

pub mod args;
pub mod config;
pub mod files;
pub mod logging;
pub mod pipeline;
pub mod plugins;
pub mod report;
