//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Reserved-word conflicts of a schema against one target.
#[derive(Debug)]
pub struct CheckReport {
    pub schema_path: PathBuf,
    pub target: String,
    /// Rendered conflicts, in validation order.
    pub conflicts: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no conflicts).
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for conflict in &self.conflicts {
            out.error(conflict);
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} has no {} naming conflicts",
                self.schema_path.display(),
                self.target
            ));
        } else {
            out.newline();
            out.preformatted(&format!(
                "{} naming conflict{} for {}",
                self.conflicts.len(),
                if self.conflicts.len() == 1 { "" } else { "s" },
                self.target
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::CapturedOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            schema_path: PathBuf::from("shapes.json"),
            target: "python".into(),
            conflicts: Vec::new(),
        };
        let mut out = CapturedOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["✓ shapes.json has no python naming conflicts"]);
    }

    #[test]
    fn test_render_conflicts() {
        let report = CheckReport {
            schema_path: PathBuf::from("shapes.json"),
            target: "rust".into(),
            conflicts: vec!["a".into(), "b".into()],
        };
        let mut out = CapturedOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            ["error: a", "error: b", "", "2 naming conflicts for rust"]
        );
    }
}
