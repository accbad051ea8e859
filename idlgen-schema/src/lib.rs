//! Schema model for the idlgen code generator.
//!
//! This crate holds the parsed and resolved representation of an IDL
//! document. It is produced upstream (parser, type resolution) and consumed
//! read-only by the generation pipeline and by every target backend.
//!
//! # Architecture
//!
//! ```text
//! .idl (text) → parser (external) → idlgen-schema (Program) → idlgen-codegen
//! ```
//!
//! All types derive `serde` traits so a resolved program can be handed over
//! as JSON or TOML.

mod program;
mod types;

pub use program::{
    Const, ConstValue, Enum, EnumValue, Field, Function, Program, Requiredness, Service, Struct,
    StructKind, Typedef,
};
pub use types::{BaseType, Type};
