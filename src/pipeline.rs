//! Pipeline: ties all front-end stages together.
//!
//! ```text
//! Raw args → Parse → Classify files → Wire plugins → CompileRequest
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::args::{names, parse_args, FlagSet, ParseError, ParsedValue};
use crate::files::{classify_files, ClassifierInput, FileKind, FileSink, ValidationError};
use crate::plugins::{create_pipeline, Bindings, PluginError};

/// Any failure that ends an invocation. At most one is reported per run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Plugin(#[from] PluginError),
}

/// The compilation unit set, grouped by kind in the order files were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompilationUnits {
    pub srcs: Vec<PathBuf>,
    pub deps: Vec<PathBuf>,
    pub indirect_deps: Vec<PathBuf>,
}

impl FileSink for CompilationUnits {
    fn add_with_kind(&mut self, path: &Path, kind: FileKind) {
        let bucket = match kind {
            FileKind::Src => &mut self.srcs,
            FileKind::Dep => &mut self.deps,
            FileKind::IndirectDep => &mut self.indirect_deps,
        };
        bucket.push(path.to_path_buf());
    }
}

/// Resolved plugin wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginSummary {
    /// Installed modules, in order.
    pub modules: Vec<String>,
    #[serde(flatten)]
    pub bindings: Bindings,
}

/// Everything the downstream compiler needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileRequest {
    /// Flag name → value, exactly as parsed.
    pub options: BTreeMap<String, ParsedValue>,
    pub plugins: PluginSummary,
    pub units: CompilationUnits,
}

/// Build a compile request from raw user arguments.
///
/// This is the main entry point for the front end. It never exits the
/// process; the caller decides how to surface a [`Failure`].
pub fn build_compile_request(
    raw_args: &[String],
    flags: &FlagSet,
) -> Result<CompileRequest, Failure> {
    // Stage 1: Parse flags
    let parsed = parse_args(raw_args, flags)?;

    if !parsed.positional().is_empty() {
        warn!(
            count = parsed.positional().len(),
            "source files given as positional args; use {} instead",
            names::SRCS
        );
    }

    // Stage 2: Classify input files
    let input = ClassifierInput {
        srcs: parsed.list(names::SRCS),
        positional: parsed.positional(),
        deps: parsed.list(names::DEPS),
        indirect_deps: parsed.list(names::INDIRECT_DEPS),
        input_prefix: parsed.text(names::INPUT_PREFIX),
    };
    let files = classify_files(&input, Failure::Validation)?;

    // Stage 3: Wire plugin modules
    let pipeline = create_pipeline(
        parsed.text(names::MESSAGE_PLUGIN),
        parsed.list(names::PLUGINS),
    )?;

    // Stage 4: Assemble the compilation unit set
    let mut units = CompilationUnits::default();
    files.add_to(&mut units);

    info!(
        srcs = units.srcs.len(),
        deps = units.deps.len(),
        indirect_deps = units.indirect_deps.len(),
        "built compile request"
    );

    Ok(CompileRequest {
        options: parsed.values().clone(),
        plugins: PluginSummary {
            modules: pipeline.names().into_iter().map(String::from).collect(),
            bindings: pipeline.bindings(),
        },
        units,
    })
}
