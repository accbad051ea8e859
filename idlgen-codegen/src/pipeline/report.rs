//! Outcome of a generation run.

use std::path::PathBuf;

use idlgen_core::WriteResult;
use serde::Serialize;

use super::Diagnostic;

/// What happened to one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Summary returned by [`Pipeline::generate`](super::Pipeline::generate).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Language tag of the backend that ran.
    pub language: String,
    /// Every file the backend closed, in order.
    pub files: Vec<FileOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Files whose content was written to disk.
    pub fn written(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files
            .iter()
            .filter(|f| f.result == WriteResult::Written)
    }

    /// Files left untouched because their content did not change.
    pub fn unchanged(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files
            .iter()
            .filter(|f| f.result == WriteResult::Unchanged)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }
}
