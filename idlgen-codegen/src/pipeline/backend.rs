//! The contract every target backend implements.

use eyre::Result;
use idlgen_core::Indent;
use idlgen_schema::{Const, Enum, Program, Service, Struct, Typedef};

use super::GenerationContext;
use crate::{ReservedWords, VERSION};

/// A target-specific code generator.
///
/// The [`Pipeline`](super::Pipeline) calls the hooks in a fixed order:
///
/// 1. [`init`](Self::init)
/// 2. [`typedef`](Self::typedef) for each typedef
/// 3. [`enumeration`](Self::enumeration) for each enum
/// 4. [`constants`](Self::constants) once with every constant
/// 5. [`forward_declaration`](Self::forward_declaration) for each struct
/// 6. [`structure`](Self::structure) or [`exception`](Self::exception) for each struct
/// 7. [`service`](Self::service) for each service
/// 8. [`finish`](Self::finish)
///
/// Any hook returning an error aborts the run.
pub trait Backend {
    /// Language tag this backend is registered under (e.g., "rs", "py").
    fn language(&self) -> &'static str;

    /// Identifiers the target language forbids.
    ///
    /// Called once when a pipeline is built.
    fn reserved_words(&self) -> ReservedWords {
        ReservedWords::empty()
    }

    /// Output directory name used for relative output paths.
    fn out_dir_base(&self) -> String {
        format!("gen-{}", self.language())
    }

    /// One level of indentation in generated code.
    fn indent_unit(&self) -> Indent {
        Indent::default()
    }

    /// Name used for the program being generated.
    fn program_name(&self, program: &Program) -> String {
        program.name.clone()
    }

    /// Name used for the service being generated.
    fn service_name(&self, service: &Service) -> String {
        service.name.clone()
    }

    /// Whether `namespace <lang>.<sub>` declarations are meaningful to this
    /// backend (e.g. `py.twisted`).
    fn is_valid_namespace(&self, _sub_namespace: &str) -> bool {
        false
    }

    /// Escape a string for a literal in the target language.
    fn escape(&self, s: &str) -> String {
        idlgen_core::escape(s)
    }

    /// First line of the autogenerated notice.
    fn autogen_summary(&self) -> String {
        format!("Autogenerated by idlgen ({})", VERSION)
    }

    /// Block comment placed at the top of every generated file.
    fn autogen_comment(&self) -> String {
        format!(
            "/**\n * {}\n *\n * DO NOT EDIT UNLESS YOU ARE SURE THAT YOU KNOW WHAT YOU ARE DOING\n *  @generated\n */\n",
            self.autogen_summary()
        )
    }

    /// Called before any entity.
    #[allow(unused_variables)]
    fn init(&mut self, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after every entity has been generated.
    #[allow(unused_variables)]
    fn finish(&mut self, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    fn typedef(&mut self, ctx: &mut GenerationContext, typedef: &Typedef) -> Result<()>;

    fn enumeration(&mut self, ctx: &mut GenerationContext, en: &Enum) -> Result<()>;

    /// Generate all constants at once.
    ///
    /// Defaults to calling [`constant`](Self::constant) for each one.
    fn constants(&mut self, ctx: &mut GenerationContext, consts: &[Const]) -> Result<()> {
        for constant in consts {
            self.constant(ctx, constant)?;
        }
        Ok(())
    }

    #[allow(unused_variables)]
    fn constant(&mut self, ctx: &mut GenerationContext, constant: &Const) -> Result<()> {
        Ok(())
    }

    /// Declare a struct before any struct is defined.
    #[allow(unused_variables)]
    fn forward_declaration(&mut self, ctx: &mut GenerationContext, st: &Struct) -> Result<()> {
        Ok(())
    }

    /// Define a struct or union.
    fn structure(&mut self, ctx: &mut GenerationContext, st: &Struct) -> Result<()>;

    /// Define an exception. Exceptions are generated like structs by default.
    fn exception(&mut self, ctx: &mut GenerationContext, exception: &Struct) -> Result<()> {
        self.structure(ctx, exception)
    }

    fn service(&mut self, ctx: &mut GenerationContext, service: &Service) -> Result<()>;
}
