//! File classifier: srcs/deps/indirect deps → one partition by kind.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::files::kind::{FileKind, FileSet};

/// Semantically invalid combinations of otherwise well-formed flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("must provide source files (--srcs)")]
    NoSources,

    #[error("found sources from both --srcs and positional args (please use --srcs only)")]
    ConflictingSources,
}

/// Borrowed view of the parsed file lists.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierInput<'a> {
    /// Entries from `--srcs`.
    pub srcs: &'a [String],
    /// Legacy positional sources. Exactly one of `srcs` and `positional`
    /// must be non-empty.
    pub positional: &'a [String],
    pub deps: &'a [String],
    pub indirect_deps: &'a [String],
    /// Prepended verbatim to every entry.
    pub input_prefix: &'a str,
}

/// Insertion-ordered, duplicate-free set of entries.
#[derive(Default)]
struct OrderedSet<'a> {
    order: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> OrderedSet<'a> {
    fn insert(&mut self, entry: &'a str) {
        if self.seen.insert(entry) {
            self.order.push(entry);
        }
    }

    fn contains(&self, entry: &str) -> bool {
        self.seen.contains(entry)
    }
}

/// Partition the input files by kind.
///
/// A file listed under several kinds keeps the strongest one: a file in both
/// srcs and deps is a source, one in both deps and indirect deps is a
/// dependency. Validation failures are passed to `on_failure` and its result
/// is returned as the error.
pub fn classify_files<E, F>(input: &ClassifierInput<'_>, on_failure: F) -> Result<FileSet, E>
where
    F: FnOnce(ValidationError) -> E,
{
    match (input.srcs.is_empty(), input.positional.is_empty()) {
        (true, true) => return Err(on_failure(ValidationError::NoSources)),
        (false, false) => return Err(on_failure(ValidationError::ConflictingSources)),
        _ => {}
    }

    let mut srcs = OrderedSet::default();
    for entry in input.srcs.iter().chain(input.positional) {
        srcs.insert(entry);
    }

    let mut deps = OrderedSet::default();
    for entry in input.deps.iter().filter(|e| !srcs.contains(e)) {
        deps.insert(entry);
    }

    let mut indirect_deps = OrderedSet::default();
    for entry in input
        .indirect_deps
        .iter()
        .filter(|e| !srcs.contains(e) && !deps.contains(e))
    {
        indirect_deps.insert(entry);
    }

    let mut files = FileSet::default();
    for (set, kind) in [
        (&srcs, FileKind::Src),
        (&deps, FileKind::Dep),
        (&indirect_deps, FileKind::IndirectDep),
    ] {
        for entry in &set.order {
            files.push(PathBuf::from(format!("{}{}", input.input_prefix, entry)), kind);
        }
    }

    debug!(
        srcs = srcs.order.len(),
        deps = deps.order.len(),
        indirect_deps = indirect_deps.order.len(),
        "classified input files"
    );
    Ok(files)
}
