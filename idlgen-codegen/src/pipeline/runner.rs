//! Pipeline orchestrator.

use eyre::{Result, WrapErr};
use idlgen_schema::Program;

use super::{Backend, Entity, GenerationContext, GenerationReport};
use crate::Validator;

/// Drives one [`Backend`] over a program.
///
/// The reserved-word set is read from the backend once, when the pipeline
/// is built, and reused for every [`generate`](Self::generate) call.
///
/// # Example
///
/// ```ignore
/// let mut backend = OutlineBackend::new(&options)?;
/// let report = Pipeline::new(&mut backend).generate(&program)?;
/// ```
pub struct Pipeline<'b> {
    backend: &'b mut dyn Backend,
    validator: Validator,
}

impl<'b> Pipeline<'b> {
    pub fn new(backend: &'b mut dyn Backend) -> Self {
        let validator = Validator::new(backend.reserved_words());
        Self { backend, validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate `program` and generate it with the backend.
    ///
    /// # Errors
    ///
    /// Returns the validation error (an [`idlgen_core::Error`]) before any
    /// hook runs, or the first hook error, wrapped with the entity that
    /// failed. Files closed before a failure stay on disk.
    pub fn generate(&mut self, program: &Program) -> Result<GenerationReport> {
        self.validator
            .validate(program)
            .map_err(|e| eyre::Report::new(*e))?;

        let language = self.backend.language();
        let mut ctx = GenerationContext::for_backend(&*self.backend, program);
        tracing::debug!(
            language,
            program = ctx.program_name(),
            out_dir = ctx.out_dir(),
            "generating program"
        );

        self.run_hook(&mut ctx, "init", |backend, ctx| backend.init(ctx))?;

        for entity in Entity::plan(program) {
            tracing::debug!(kind = entity.kind(), name = entity.name(), "dispatching");
            let scope = format!("{} {}", entity.kind(), entity.name());
            self.run_hook(&mut ctx, &scope, |backend, ctx| dispatch(backend, ctx, entity))
                .wrap_err_with(|| {
                    format!("failed to generate {} '{}'", entity.kind(), entity.name())
                })?;
        }

        self.run_hook(&mut ctx, "finish", |backend, ctx| backend.finish(ctx))?;

        Ok(ctx.into_report(language))
    }

    fn run_hook<F>(&mut self, ctx: &mut GenerationContext, scope: &str, hook: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Backend, &mut GenerationContext) -> Result<()>,
    {
        let depth = ctx.indent_count();
        hook(&mut *self.backend, ctx)?;
        ctx.indent_validate(depth, scope);
        Ok(())
    }
}

fn dispatch(
    backend: &mut dyn Backend,
    ctx: &mut GenerationContext,
    entity: Entity<'_>,
) -> Result<()> {
    match entity {
        Entity::Typedef(typedef) => backend.typedef(ctx, typedef),
        Entity::Enum(en) => backend.enumeration(ctx, en),
        Entity::Constants(consts) => backend.constants(ctx, consts),
        Entity::ForwardDeclaration(st) => backend.forward_declaration(ctx, st),
        Entity::Struct(st) => backend.structure(ctx, st),
        Entity::Exception(st) => backend.exception(ctx, st),
        Entity::Service(service) => {
            ctx.set_service_name(backend.service_name(service));
            backend.service(ctx, service)
        }
    }
}
