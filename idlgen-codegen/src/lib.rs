//! Shared generation framework for idlgen target backends.
//!
//! This crate provides the language-agnostic part of code generation: it
//! validates a [`Program`](idlgen_schema::Program) against a target's
//! reserved words and then drives a [`Backend`] through every schema entity
//! in a fixed order.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Orchestration ([`Pipeline`], [`Backend`], [`Entity`], [`GenerationContext`])
//! - [`validate`] - Reserved-word validation ([`Validator`])
//! - [`language`] - Reserved-word sets per target language
//! - [`options`] - `language[:opts]` option strings
//! - [`registry`] - Backend lookup by language tag
//! - [`testing`] - Test utilities (feature-gated)

pub mod language;
pub mod options;
pub mod pipeline;
pub mod registry;
pub mod validate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use language::ReservedWords;
pub use options::GeneratorOptions;
pub use pipeline::{
    Backend, Diagnostic, Entity, FileOutcome, GenerationContext, GenerationReport, Pipeline,
    Severity,
};
pub use registry::Registry;
pub use validate::Validator;

/// Version reported in autogenerated notices.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
