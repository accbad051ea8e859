//! Generate command report data structures.

use idlgen_codegen::GenerationReport;
use serde::Serialize;

use super::output::{Output, Report};

/// Outcome of running every selected generator over one schema.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Program name from the schema.
    pub program: String,
    /// One entry per `--gen`, in command-line order.
    pub runs: Vec<GenerationReport>,
}

impl GenerateReport {
    pub fn written_count(&self) -> usize {
        self.runs.iter().map(|run| run.written().count()).sum()
    }

    pub fn unchanged_count(&self) -> usize {
        self.runs.iter().map(|run| run.unchanged().count()).sum()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for run in &self.runs {
            out.section(&run.language);
            for file in run.written() {
                out.added_item(&file.path.display().to_string());
            }
            for file in run.unchanged() {
                out.kept_item(&format!("{} (unchanged)", file.path.display()));
            }
            for diag in &run.diagnostics {
                let msg = match &diag.location {
                    Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                    None => diag.message.clone(),
                };
                if diag.severity.is_error() {
                    out.error(&msg);
                } else {
                    out.warning(&msg);
                }
            }
        }

        out.newline();
        out.preformatted(&format!(
            "{}: {} written, {} unchanged",
            self.program,
            self.written_count(),
            self.unchanged_count()
        ));
    }
}
