mod check;
mod generate;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on typed idlgen errors with pretty formatting
pub(crate) trait ExitOnDiagnostic<T> {
    /// Render an [`idlgen_core::Error`] anywhere in the chain with miette and
    /// exit with status 1. Any other error is returned unchanged.
    fn exit_on_diagnostic(self) -> Result<T>;
}

impl<T> ExitOnDiagnostic<T> for Result<T> {
    fn exit_on_diagnostic(self) -> Result<T> {
        let err = match self {
            Ok(v) => return Ok(v),
            Err(err) => err,
        };
        if err.downcast_ref::<idlgen_core::Error>().is_none() {
            return Err(err);
        }

        let context = err.to_string();
        match err.downcast::<idlgen_core::Error>() {
            Ok(diagnostic) => {
                if context != diagnostic.to_string() {
                    eprintln!("error: {}", context);
                }
                eprintln!("{:?}", miette::Report::new(diagnostic));
                std::process::exit(1);
            }
            Err(err) => Err(err),
        }
    }
}

#[derive(Parser)]
#[command(name = "idlgen")]
#[command(version)]
#[command(about = "Generate source code from resolved IDL schemas")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for one or more targets
    Generate(GenerateCommand),

    /// Report every reserved-word conflict for a target language
    Check(CheckCommand),

    /// List the available generators
    List(ListCommand),
}
