//! Backends built into the `idlgen` binary.

mod outline;

use idlgen_codegen::Registry;
use outline::OutlineBackend;

/// Registry of every backend the binary can run.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(
        "outline",
        "Plain-text outline of every schema entity (options: snake, camel)",
        OutlineBackend::create,
    );
    registry
}
