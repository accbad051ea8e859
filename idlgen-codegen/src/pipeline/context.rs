//! Per-run state handed to every backend hook.

use std::{collections::HashSet, path::PathBuf};

use eyre::Result;
use idlgen_core::{Indent, OutputFile, WriteResult};
use idlgen_schema::Program;

use super::{Backend, Diagnostic, FileOutcome, GenerationReport};

/// Mutable state for one [`Pipeline::generate`](super::Pipeline::generate) call.
///
/// Owns the indentation depth, the temp-name counter, and the record of
/// every file written and every diagnostic raised during the run.
#[derive(Debug)]
pub struct GenerationContext {
    program_name: String,
    service_name: Option<String>,
    out_dir: String,
    unit: Indent,
    depth: usize,
    tmp_counter: usize,
    issued: HashSet<String>,
    files: Vec<FileOutcome>,
    diagnostics: Vec<Diagnostic>,
}

/// Output directory for `program` with a target base directory.
///
/// An absolute declared path is used as is; a relative one gets `base`
/// appended. The result always ends with `/`.
pub fn out_dir(program: &Program, base: &str) -> String {
    if program.out_path_is_absolute {
        format!("{}/", program.out_path)
    } else {
        format!("{}{}/", program.out_path, base)
    }
}

impl GenerationContext {
    pub fn new(program_name: impl Into<String>, out_dir: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            service_name: None,
            out_dir: out_dir.into(),
            unit: Indent::default(),
            depth: 0,
            tmp_counter: 0,
            issued: HashSet::new(),
            files: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Build the context for running `backend` over `program`.
    pub fn for_backend(backend: &dyn Backend, program: &Program) -> Self {
        Self::new(
            backend.program_name(program),
            out_dir(program, &backend.out_dir_base()),
        )
        .with_indent_unit(backend.indent_unit())
    }

    pub fn with_indent_unit(mut self, unit: Indent) -> Self {
        self.unit = unit;
        self
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Name of the service being generated, if any.
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    pub(crate) fn set_service_name(&mut self, name: String) {
        self.service_name = Some(name);
    }

    /// Directory generated files go to, with a trailing `/`.
    pub fn out_dir(&self) -> &str {
        &self.out_dir
    }

    /// Path of `file_name` inside [`out_dir`](Self::out_dir).
    pub fn out_path(&self, file_name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.out_dir, file_name))
    }

    // -------------------------------------------------------------------------
    // Indentation
    // -------------------------------------------------------------------------

    /// Prefix for the current nesting level.
    pub fn indent(&self) -> String {
        self.unit.repeat(self.depth)
    }

    pub fn indent_up(&mut self) {
        self.depth += 1;
    }

    /// Leave one nesting level. Never goes below zero.
    pub fn indent_down(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => {
                tracing::warn!("indent decreased below zero");
                self.diagnostics.push(Diagnostic::warning(
                    "indent",
                    "indent decreased below zero",
                ));
            }
        }
    }

    pub fn indent_count(&self) -> usize {
        self.depth
    }

    /// Record a warning if the depth is not `expected`.
    ///
    /// Returns true when the depth matches.
    pub fn indent_validate(&mut self, expected: usize, scope: &str) -> bool {
        if self.depth == expected {
            return true;
        }

        let difference = self.depth as isize - expected as isize;
        tracing::warn!(scope, difference, "wrong indent count");
        self.diagnostics.push(
            Diagnostic::warning(
                "indent",
                format!("wrong indent count in {}: difference = {}", scope, difference),
            )
            .at(scope),
        );
        false
    }

    /// Run `body` one nesting level deeper.
    pub fn indented<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.indent_up();
        let result = body(self);
        self.indent_down();
        result
    }

    // -------------------------------------------------------------------------
    // Names and text
    // -------------------------------------------------------------------------

    /// A fresh name `<base><n>`, never returned before in this run.
    pub fn tmp(&mut self, base: &str) -> String {
        loop {
            let name = format!("{}{}", base, self.tmp_counter);
            self.tmp_counter += 1;
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }

    /// Render `contents` as a comment block at the current indentation.
    ///
    /// `start` and `end` are written as given (with the indent prefix) when
    /// non-empty; every line of `contents` gets `prefix`. Blank lines keep the
    /// prefix without its trailing whitespace.
    pub fn docstring_comment(
        &self,
        start: &str,
        prefix: &str,
        contents: &str,
        end: &str,
    ) -> String {
        let indent = self.indent();
        let mut out = String::new();

        if !start.is_empty() {
            out.push_str(&indent);
            out.push_str(start);
        }
        for line in contents.lines() {
            if !line.is_empty() {
                out.push_str(&indent);
                out.push_str(prefix);
                out.push_str(line);
            } else if !prefix.is_empty() {
                out.push_str(&indent);
                out.push_str(prefix.trim_end());
            }
            out.push('\n');
        }
        if !end.is_empty() {
            out.push_str(&indent);
            out.push_str(end);
        }

        out
    }

    // -------------------------------------------------------------------------
    // Files and diagnostics
    // -------------------------------------------------------------------------

    /// Buffer a file through `body` and close it.
    ///
    /// The file is only written when its content differs from what is on
    /// disk. If `body` fails nothing is written and the error is returned.
    pub fn write_file<F>(&mut self, path: impl Into<PathBuf>, body: F) -> Result<WriteResult>
    where
        F: FnOnce(&mut Self, &mut OutputFile) -> Result<()>,
    {
        let path = path.into();
        let result = OutputFile::scoped(path.clone(), |out| body(self, out))?;
        self.files.push(FileOutcome { path, result });
        Ok(result)
    }

    pub fn add_warning(&mut self, source: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(source, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Files closed so far.
    pub fn files(&self) -> &[FileOutcome] {
        &self.files
    }

    pub fn into_report(self, language: impl Into<String>) -> GenerationReport {
        GenerationReport {
            language: language.into(),
            files: self.files,
            diagnostics: self.diagnostics,
        }
    }
}
