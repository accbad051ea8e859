//! Schema entities in generation order.

use idlgen_schema::{Const, Enum, Program, Service, Struct, Typedef};

/// One unit of work handed to a backend.
///
/// The set of variants is closed; the pipeline dispatches with an
/// exhaustive `match`, so a new entity kind cannot go unhandled.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Typedef(&'a Typedef),
    Enum(&'a Enum),
    /// All constants of the program, in declared order.
    Constants(&'a [Const]),
    ForwardDeclaration(&'a Struct),
    /// A struct or union definition.
    Struct(&'a Struct),
    Exception(&'a Struct),
    Service(&'a Service),
}

impl<'a> Entity<'a> {
    /// The full generation order for `program`.
    ///
    /// Typedefs, enums, the constants batch, one forward declaration per
    /// struct, one definition per struct (exceptions included, in declared
    /// order), then services. Structs precede services because services
    /// refer to them.
    pub fn plan(program: &'a Program) -> Vec<Entity<'a>> {
        let mut plan = Vec::with_capacity(
            program.typedefs.len()
                + program.enums.len()
                + 1
                + program.structs.len() * 2
                + program.services.len(),
        );

        plan.extend(program.typedefs.iter().map(Entity::Typedef));
        plan.extend(program.enums.iter().map(Entity::Enum));
        plan.push(Entity::Constants(&program.consts));
        plan.extend(program.structs.iter().map(Entity::ForwardDeclaration));
        plan.extend(program.structs.iter().map(|st| {
            if st.is_exception() {
                Entity::Exception(st)
            } else {
                Entity::Struct(st)
            }
        }));
        plan.extend(program.services.iter().map(Entity::Service));

        plan
    }

    /// Short kind label, used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Typedef(_) => "typedef",
            Entity::Enum(_) => "enum",
            Entity::Constants(_) => "constants",
            Entity::ForwardDeclaration(_) => "forward declaration",
            Entity::Struct(_) => "struct",
            Entity::Exception(_) => "exception",
            Entity::Service(_) => "service",
        }
    }

    /// Name of the entity (`"*"` for the constants batch).
    pub fn name(&self) -> &'a str {
        match *self {
            Entity::Typedef(t) => &t.name,
            Entity::Enum(e) => &e.name,
            Entity::Constants(_) => "*",
            Entity::ForwardDeclaration(s) | Entity::Struct(s) | Entity::Exception(s) => &s.name,
            Entity::Service(s) => &s.name,
        }
    }
}
