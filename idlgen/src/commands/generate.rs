use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use idlgen_codegen::GeneratorOptions;

use super::ExitOnDiagnostic;
use crate::{
    backends, ops,
    reports::{Report, TerminalOutput},
    schema,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Resolved schema to generate from (.json or .toml)
    pub schema: PathBuf,

    /// Generator to run, as LANG[:OPT[=VALUE],...] (repeatable)
    #[arg(long = "gen", value_name = "LANG[:OPTS]", required = true)]
    pub generators: Vec<GeneratorOptions>,

    /// Write into DIR/gen-<lang>/ (defaults to the current directory)
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", conflicts_with = "out")]
    pub out_dir: Option<PathBuf>,

    /// Write directly into DIR, without a gen-<lang> subdirectory
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut program = schema::load_program(&self.schema)?;
        if let Some(dir) = &self.out {
            program = program.absolute_out_path(dir.display().to_string());
        } else if let Some(dir) = &self.out_dir {
            program = program.out_path(format!("{}/", dir.display()));
        }

        let report =
            ops::generate(&program, &backends::registry(), &self.generators).exit_on_diagnostic()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
