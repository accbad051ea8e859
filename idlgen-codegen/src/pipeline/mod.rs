//! Generation pipeline.
//!
//! A [`Pipeline`] wraps one [`Backend`] and turns a [`Program`] into output
//! files:
//!
//! - Validation first (reserved words), nothing is emitted on failure
//! - A fixed entity order (typedefs → enums → constants → structs → services)
//! - Closed dispatch over [`Entity`] to the backend's hooks
//! - Shared per-run state (indentation, temp names, written files) via
//!   [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use idlgen_codegen::pipeline::Pipeline;
//!
//! let mut backend = MyBackend::new(&options)?;
//! let report = Pipeline::new(&mut backend).generate(&program)?;
//!
//! for diag in &report.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! ```
//!
//! [`Program`]: idlgen_schema::Program

mod backend;
mod context;
mod diagnostic;
mod entity;
mod report;
mod runner;

pub use backend::Backend;
pub use context::{GenerationContext, out_dir};
pub use diagnostic::{Diagnostic, Severity};
pub use entity::Entity;
pub use report::{FileOutcome, GenerationReport};
pub use runner::Pipeline;
