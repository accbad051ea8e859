//! Generate operation - run every selected backend over a program.

use std::fs;

use eyre::{Context, Result};
use idlgen_codegen::{GeneratorOptions, Pipeline, Registry, pipeline::out_dir};
use idlgen_schema::Program;

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// Every backend is constructed before any of them runs, so an unknown
/// generator or a rejected option produces no output at all. Backends then
/// run in the order given; the first failure stops the remaining ones.
pub fn generate(
    program: &Program,
    registry: &Registry,
    selections: &[GeneratorOptions],
) -> Result<GenerateReport> {
    let mut backends = Vec::with_capacity(selections.len());
    for selection in selections {
        let backend = registry
            .create(selection)
            .wrap_err_with(|| format!("failed to set up generator '{}'", selection))?;
        backends.push(backend);
    }

    let mut runs = Vec::with_capacity(backends.len());
    for mut backend in backends {
        let dir = out_dir(program, &backend.out_dir_base());
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("failed to create output directory '{}'", dir))?;

        let language = backend.language();
        let report = Pipeline::new(backend.as_mut())
            .generate(program)
            .wrap_err_with(|| format!("generator '{}' failed", language))?;
        runs.push(report);
    }

    Ok(GenerateReport {
        program: program.name.clone(),
        runs,
    })
}

#[cfg(test)]
mod tests {
    use idlgen_codegen::{Backend, testing::RecordingBackend};
    use idlgen_core::WriteResult;
    use idlgen_schema::{BaseType, Field, Struct, Type};
    use tempfile::TempDir;

    use super::*;
    use crate::backends;

    fn recording(_: &GeneratorOptions) -> Result<Box<dyn Backend>> {
        Ok(Box::new(RecordingBackend::new().write_files()))
    }

    fn registry() -> Registry {
        let mut registry = backends::registry();
        registry.register("recording", "Records hook calls", recording);
        registry
    }

    fn program(dir: &TempDir) -> Program {
        Program::new("shapes")
            .out_path(format!("{}/", dir.path().display()))
            .with_struct(
                Struct::new("Point").field(Field::new(1, "x", Type::base(BaseType::I32))),
            )
    }

    fn select(selectors: &[&str]) -> Vec<GeneratorOptions> {
        selectors
            .iter()
            .map(|selector| GeneratorOptions::parse(selector).unwrap())
            .collect()
    }

    #[test]
    fn test_runs_each_generator_into_its_own_directory() {
        let temp = TempDir::new().unwrap();
        let report = generate(
            &program(&temp),
            &registry(),
            &select(&["outline", "recording"]),
        )
        .unwrap();

        assert_eq!(report.runs.len(), 2);
        assert!(temp.path().join("gen-outline/shapes.outline").exists());
        assert!(temp.path().join("gen-recording/Point.txt").exists());
        assert_eq!(report.written_count(), 2);
    }

    #[test]
    fn test_second_generation_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let program = program(&temp);
        let selections = select(&["outline:camel"]);

        generate(&program, &registry(), &selections).unwrap();
        let second = generate(&program, &registry(), &selections).unwrap();

        assert_eq!(second.runs[0].files[0].result, WriteResult::Unchanged);
        assert_eq!(second.unchanged_count(), 1);
    }

    #[test]
    fn test_bad_selection_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let err = generate(
            &program(&temp),
            &registry(),
            &select(&["outline", "outline:bogus"]),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to set up generator 'outline:bogus'"
        );
        assert!(!temp.path().join("gen-outline").exists());
    }

    #[test]
    fn test_unknown_generator() {
        let temp = TempDir::new().unwrap();
        let err = generate(&program(&temp), &registry(), &select(&["cobol"])).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "unknown generator 'cobol' (available: outline, recording)"
        );
    }
}
