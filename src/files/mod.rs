//! Input file classification.
//!
//! Turns the overlapping `--srcs`, `--deps` and `--indirect-deps` lists into
//! one partition where every entry carries exactly one [`FileKind`].

mod classifier;
mod kind;

pub use classifier::{classify_files, ClassifierInput, ValidationError};
pub use kind::{ClassifiedFile, FileKind, FileSet, FileSink};
