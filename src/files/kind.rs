use std::path::{Path, PathBuf};

use serde::Serialize;

/// How the compiler treats an input file.
///
/// Variants are declared from weakest to strongest so the derived ordering
/// matches precedence: `Src > Dep > IndirectDep`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Only needed by a dependency; signatures are checked.
    IndirectDep,
    /// Referenced by the sources; parsed but not compiled.
    Dep,
    /// Compiled.
    Src,
}

/// A file path paired with exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Receives classified files, one call per file.
pub trait FileSink {
    fn add_with_kind(&mut self, path: &Path, kind: FileKind);
}

/// The classifier's output, in emission order: sources, then dependencies,
/// then indirect dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileSet {
    files: Vec<ClassifiedFile>,
}

impl FileSet {
    pub(crate) fn push(&mut self, path: PathBuf, kind: FileKind) {
        self.files.push(ClassifiedFile { path, kind });
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedFile> {
        self.files.iter()
    }

    /// Files of one kind, in emission order.
    pub fn of_kind(&self, kind: FileKind) -> impl Iterator<Item = &ClassifiedFile> {
        self.files.iter().filter(move |file| file.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Feed every file to `sink` in emission order.
    pub fn add_to<S: FileSink>(&self, sink: &mut S) {
        for file in &self.files {
            sink.add_with_kind(&file.path, file.kind);
        }
    }
}
