use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use idlgen_codegen::ReservedWords;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    schema,
};

/// Target languages with a built-in reserved-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Rust,
    Typescript,
    Go,
    Python,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::Typescript => "typescript",
            Target::Go => "go",
            Target::Python => "python",
        }
    }

    pub fn reserved_words(&self) -> ReservedWords {
        ReservedWords::for_language(self.as_str()).unwrap_or_default()
    }
}

#[derive(Args)]
pub struct CheckCommand {
    /// Resolved schema to check (.json or .toml)
    pub schema: PathBuf,

    /// Language whose reserved words are checked
    #[arg(short, long, value_enum)]
    pub target: Target,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let program = schema::load_program(&self.schema)?;
        let report = ops::check(
            &program,
            self.target.as_str(),
            self.target.reserved_words(),
            &self.schema,
        );

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_has_reserved_words() {
        for target in Target::value_variants() {
            assert!(!target.reserved_words().is_empty(), "{}", target.as_str());
        }
    }

    #[test]
    fn test_target_names_resolve_to_presets() {
        for target in Target::value_variants() {
            let preset = ReservedWords::for_language(target.as_str()).unwrap();
            assert_eq!(preset.len(), target.reserved_words().len(), "{}", target.as_str());
        }
    }

    #[test]
    fn test_reserved_words_match_target() {
        assert!(Target::Python.reserved_words().contains("lambda"));
        assert!(Target::Go.reserved_words().contains("chan"));
        assert!(!Target::Rust.reserved_words().contains("lambda"));
    }
}
