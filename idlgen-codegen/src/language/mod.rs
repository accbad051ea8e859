//! Language-specific reserved words.
//!
//! - [`ReservedWords`] - Immutable set of identifiers a target forbids
//! - [`keywords`] - Built-in word lists for common targets

pub mod keywords;
mod reserved;

pub use reserved::ReservedWords;
