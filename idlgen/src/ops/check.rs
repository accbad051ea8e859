//! Check operation - reserved-word conflicts for one target.

use std::path::Path;

use idlgen_codegen::{ReservedWords, Validator};
use idlgen_schema::Program;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Collects every identifier in `program` that `reserved` forbids.
pub fn check(
    program: &Program,
    target: &str,
    reserved: ReservedWords,
    schema_path: &Path,
) -> CheckReport {
    let validator = Validator::new(reserved);
    let conflicts: Vec<String> = validator
        .conflicts(program)
        .into_iter()
        .map(|conflict| match &conflict {
            idlgen_core::Error::NamingConflict { location, .. } => {
                format!("{}\n  --> {}", conflict, location)
            }
            other => other.to_string(),
        })
        .collect();

    tracing::debug!(target, conflicts = conflicts.len(), "checked schema");

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        target: target.to_string(),
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use idlgen_schema::{BaseType, Field, Function, Service, Struct, Type};

    use super::*;

    fn program() -> Program {
        Program::new("shapes")
            .with_struct(
                Struct::new("Point")
                    .field(Field::new(1, "x", Type::base(BaseType::I32)))
                    .field(Field::new(2, "class", Type::base(BaseType::I32))),
            )
            .with_service(Service::new("Canvas").function(
                Function::new("draw", Type::base(BaseType::Void)).param(Field::new(
                    1,
                    "lambda",
                    Type::base(BaseType::I32),
                )),
            ))
    }

    #[test]
    fn test_reports_every_conflict() {
        let report = check(
            &program(),
            "python",
            ReservedWords::python(),
            Path::new("shapes.json"),
        );

        assert!(!report.is_valid());
        assert_eq!(
            report.conflicts,
            [
                "cannot use reserved language keyword \"class\" as field name\n  --> Point.class",
                "cannot use reserved language keyword \"lambda\" as parameter name\n  --> Canvas.draw.lambda",
            ]
        );
    }

    #[test]
    fn test_clean_schema_is_valid() {
        let report = check(&program(), "go", ReservedWords::go(), Path::new("shapes.json"));
        assert!(report.is_valid());
        assert_eq!(report.target, "go");
    }
}
