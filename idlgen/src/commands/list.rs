use clap::Args;
use eyre::Result;

use crate::backends;

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = backends::registry();

        println!("Generators:");
        let width = registry.languages().map(str::len).max().unwrap_or(0);
        for entry in registry.entries() {
            println!(
                "  {:width$}  {}",
                entry.language,
                entry.description,
                width = width
            );
        }

        Ok(())
    }
}
