//! Test utilities for backends and the pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::fmt::Write as _;

use eyre::{Result, bail};
use idlgen_schema::{Const, Enum, Program, Service, Struct, Typedef};

use crate::{Backend, GenerationContext, GenerationReport, Pipeline, ReservedWords};

/// A backend that records every hook call instead of generating code.
///
/// Calls are recorded as `"<hook>:<name>"` labels (`"init"`, `"typedef:Id"`,
/// `"const:MAX"`, `"forward:Point"`, `"struct:Point"`, ..., `"finish"`).
/// Exceptions are not overridden, so they show up as `"struct:<name>"`.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    reserved: ReservedWords,
    fail_on: Option<String>,
    unbalanced_on: Option<String>,
    write_files: bool,
    /// Hook calls in the order they happened.
    pub calls: Vec<String>,
    /// Field names of each struct passed to `structure`, in order.
    pub struct_fields: Vec<(String, Vec<String>)>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report these words as reserved.
    pub fn reserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved = ReservedWords::new(words);
        self
    }

    /// Fail when the hook with this label (e.g. `"struct:Point"`) is called.
    pub fn fail_on(mut self, label: impl Into<String>) -> Self {
        self.fail_on = Some(label.into());
        self
    }

    /// Leave one extra indent level open after the hook with this label.
    pub fn unbalanced_on(mut self, label: impl Into<String>) -> Self {
        self.unbalanced_on = Some(label.into());
        self
    }

    /// Write `<name>.txt` for every struct and service.
    pub fn write_files(mut self) -> Self {
        self.write_files = true;
        self
    }

    fn record(&mut self, ctx: &mut GenerationContext, label: String) -> Result<()> {
        if self.fail_on.as_deref() == Some(label.as_str()) {
            bail!("refusing to generate {}", label);
        }
        if self.unbalanced_on.as_deref() == Some(label.as_str()) {
            ctx.indent_up();
        }
        self.calls.push(label);
        Ok(())
    }

    fn write_entity(
        &self,
        ctx: &mut GenerationContext,
        name: &str,
        lines: &[String],
    ) -> Result<()> {
        if !self.write_files {
            return Ok(());
        }
        let path = ctx.out_path(&format!("{}.txt", name));
        ctx.write_file(path, |ctx, out| {
            writeln!(out, "{}", name)?;
            ctx.indented(|ctx| -> Result<()> {
                for line in lines {
                    writeln!(out, "{}{}", ctx.indent(), line)?;
                }
                Ok(())
            })
        })?;
        Ok(())
    }
}

impl Backend for RecordingBackend {
    fn language(&self) -> &'static str {
        "recording"
    }

    fn reserved_words(&self) -> ReservedWords {
        self.reserved.clone()
    }

    fn init(&mut self, ctx: &mut GenerationContext) -> Result<()> {
        self.record(ctx, "init".into())
    }

    fn finish(&mut self, ctx: &mut GenerationContext) -> Result<()> {
        self.record(ctx, "finish".into())
    }

    fn typedef(&mut self, ctx: &mut GenerationContext, typedef: &Typedef) -> Result<()> {
        self.record(ctx, format!("typedef:{}", typedef.name))
    }

    fn enumeration(&mut self, ctx: &mut GenerationContext, en: &Enum) -> Result<()> {
        self.record(ctx, format!("enum:{}", en.name))
    }

    fn constant(&mut self, ctx: &mut GenerationContext, constant: &Const) -> Result<()> {
        self.record(ctx, format!("const:{}", constant.name))
    }

    fn forward_declaration(&mut self, ctx: &mut GenerationContext, st: &Struct) -> Result<()> {
        self.record(ctx, format!("forward:{}", st.name))
    }

    fn structure(&mut self, ctx: &mut GenerationContext, st: &Struct) -> Result<()> {
        self.record(ctx, format!("struct:{}", st.name))?;
        let fields: Vec<String> = st.fields.iter().map(|f| f.name.clone()).collect();
        self.write_entity(ctx, &st.name, &fields)?;
        self.struct_fields.push((st.name.clone(), fields));
        Ok(())
    }

    fn service(&mut self, ctx: &mut GenerationContext, service: &Service) -> Result<()> {
        self.record(ctx, format!("service:{}", service.name))?;
        let functions: Vec<String> = service.functions.iter().map(|f| f.name.clone()).collect();
        self.write_entity(ctx, &service.name, &functions)
    }
}

/// Run `backend` over `program` with output redirected to a temp directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_in_temp(
    backend: &mut dyn Backend,
    program: &Program,
) -> Result<(tempfile::TempDir, GenerationReport)> {
    let temp_dir = tempfile::TempDir::new()?;
    let program = program
        .clone()
        .absolute_out_path(temp_dir.path().display().to_string());
    let report = Pipeline::new(backend).generate(&program)?;
    Ok((temp_dir, report))
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut diff = String::new();
    let max_lines = expected_lines.len().max(actual_lines.len());

    for i in 0..max_lines {
        let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
        let act = actual_lines.get(i).copied().unwrap_or("<missing>");

        if exp != act {
            let _ = writeln!(diff, "Line {}:", i + 1);
            let _ = writeln!(diff, "  expected: {}", exp);
            let _ = writeln!(diff, "  actual:   {}", act);
        }
    }
    if diff.is_empty() {
        diff.push_str("  (trailing newline differs)\n");
    }

    panic!("Content mismatch:\n{}", diff);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use idlgen_schema::{BaseType, Field, Type};

    use super::*;

    #[test]
    fn test_generate_in_temp_writes_files() {
        let program = Program::new("shapes").with_struct(
            Struct::new("Point")
                .field(Field::new(1, "x", Type::base(BaseType::I32)))
                .field(Field::new(2, "y", Type::base(BaseType::I32))),
        );
        let mut backend = RecordingBackend::new().write_files();

        let (temp, report) = generate_in_temp(&mut backend, &program).unwrap();

        assert_eq!(report.written().count(), 1);
        assert_content_eq(
            "Point\n  x\n  y\n",
            &fs::read_to_string(temp.path().join("Point.txt")).unwrap(),
        );
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }
}
