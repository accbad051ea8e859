//! Loading resolved schemas from disk.

use std::{ffi::OsStr, fs, path::Path};

use eyre::{Context, Result, bail};
use idlgen_schema::Program;

/// Read a resolved program from a `.json` or `.toml` file.
pub fn load_program(path: &Path) -> Result<Program> {
    let format = match path.extension().and_then(OsStr::to_str) {
        Some(ext @ ("json" | "toml")) => ext,
        _ => bail!(
            "unsupported schema file '{}': expected a .json or .toml file",
            path.display()
        ),
    };

    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read schema '{}'", path.display()))?;

    let program: Program = if format == "json" {
        serde_json::from_str(&text)
            .wrap_err_with(|| format!("failed to parse schema '{}'", path.display()))?
    } else {
        toml::from_str(&text)
            .wrap_err_with(|| format!("failed to parse schema '{}'", path.display()))?
    };

    tracing::debug!(
        path = %path.display(),
        program = %program.name,
        structs = program.structs.len(),
        services = program.services.len(),
        "loaded schema"
    );
    Ok(program)
}
