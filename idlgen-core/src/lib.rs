//! Core utilities and types for the idlgen code generator.
//!
//! This crate provides the pieces every target backend shares: naming and
//! escaping helpers, the content-stable [`OutputFile`] writer, the indent
//! unit, and the error taxonomy.

mod error;
mod file;
mod indent;
mod naming;

pub use error::{Error, IdentKind, Result};
// File operations
pub use file::{OutputFile, WriteResult};
pub use indent::Indent;
// String utilities
pub use naming::{
    camelcase, capitalize, decapitalize, escape, format_double, lowercase, underscore, uppercase,
};
