use crate::Blueprint;
use crate::Phase;
use crate::PhaseId;
use crate::Schema;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::phases;
use crate::pipeline::PipelineError;
use crate::pipeline::PipelineOptions;
use crate::pipeline::PipelineOutcome;
use crate::rules;
use regex::Regex;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PipelineError>;

/// An ordered list of [`Phase`]s along with the schema and options they run
/// with.
///
/// Pipelines are built with [`Pipeline::for_document`] or
/// [`Pipeline::for_schema`] and can then be narrowed
/// ([`upto`](Pipeline::upto), [`reject`](Pipeline::reject),
/// [`without`](Pipeline::without)) or extended ([`append`](Pipeline::append))
/// before being [`run`](Pipeline::run).
#[derive(Clone)]
pub struct Pipeline<'schema> {
    options: PipelineOptions,
    phases: Vec<Arc<dyn Phase>>,
    schema: Option<&'schema Schema>,
}

impl<'schema> Pipeline<'schema> {
    /// The full pipeline for validating an executable document against
    /// `schema`.
    pub fn for_document(schema: &'schema Schema, options: PipelineOptions) -> Self {
        let mut doc_phases: Vec<Arc<dyn Phase>> = vec![
            Arc::new(phases::ParseDocument),
            Arc::new(phases::BuildDocument),
            Arc::new(phases::CurrentOperation),
        ];
        doc_phases.extend(rules::document_rules());
        doc_phases.push(Arc::new(phases::ValidationResult::document()));
        doc_phases.push(Arc::new(phases::DocumentResult));

        log::debug!("Built a document pipeline with {} phases.", doc_phases.len());
        Self {
            options,
            phases: doc_phases,
            schema: Some(schema),
        }
    }

    /// The full pipeline for building and validating a schema document.
    ///
    /// Schema pipelines do not have a [`PhaseContext::schema`] unless one is
    /// attached with [`Pipeline::with_schema`].
    pub fn for_schema(options: PipelineOptions) -> Self {
        let mut schema_phases: Vec<Arc<dyn Phase>> = vec![
            Arc::new(phases::ParseSchema),
            Arc::new(phases::BuildSchema),
        ];
        schema_phases.extend(rules::schema_rules());
        schema_phases.push(Arc::new(phases::ValidationResult::schema()));

        log::debug!("Built a schema pipeline with {} phases.", schema_phases.len());
        Self {
            options,
            phases: schema_phases,
            schema: None,
        }
    }

    pub fn append(mut self, phases: impl IntoIterator<Item = Arc<dyn Phase>>) -> Self {
        self.phases.extend(phases);
        self
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn phase_ids(&self) -> Vec<PhaseId> {
        self.phases.iter().map(|phase| phase.id()).collect()
    }

    /// Drops every phase whose id matches `pattern`.
    pub fn reject(mut self, pattern: &Regex) -> Self {
        self.phases.retain(|phase| {
            let rejected = pattern.is_match(phase.id().name());
            if rejected {
                log::trace!("Rejecting the `{}` phase.", phase.id());
            }
            !rejected
        });
        self
    }

    /// Truncates the pipeline so that `phase` is its last phase.
    pub fn upto(mut self, phase: PhaseId) -> Result<Self> {
        let idx =
            self.phases.iter()
                .position(|p| p.id() == phase)
                .ok_or_else(|| PipelineError::UnknownPhase {
                    phase,
                    known_phases: self.phase_ids(),
                })?;
        self.phases.truncate(idx + 1);
        Ok(self)
    }

    /// Removes the phase with the given id.
    pub fn without(mut self, phase: PhaseId) -> Result<Self> {
        let idx =
            self.phases.iter()
                .position(|p| p.id() == phase)
                .ok_or_else(|| PipelineError::UnknownPhase {
                    phase,
                    known_phases: self.phase_ids(),
                })?;
        self.phases.remove(idx);
        Ok(self)
    }

    /// Runs every phase, in order, over a fresh [`Blueprint`] of `document`.
    pub fn run(&self, document: &str) -> PipelineOutcome {
        let ctx = PhaseContext {
            schema: self.schema,
            options: &self.options,
        };

        let mut blueprint = Blueprint::new(document);
        let mut idx = 0;
        while let Some(phase) = self.phases.get(idx) {
            log::trace!("Running the `{}` phase.", phase.id());
            match phase.run(blueprint, &ctx) {
                PhaseResult::Continue(next) => {
                    blueprint = next;
                    idx += 1;
                },

                PhaseResult::Jump { blueprint: next, to } => {
                    let target =
                        if self.options.jump_phases {
                            self.phases[idx + 1..].iter()
                                .position(|p| p.id() == to)
                                .map(|offset| idx + 1 + offset)
                        } else {
                            None
                        };

                    match target {
                        Some(target) => {
                            log::trace!(
                                "The `{}` phase jumped to the `{to}` phase.",
                                phase.id(),
                            );
                            blueprint = next;
                            idx = target;
                        },
                        None => return self.halted(next, idx),
                    }
                },

                PhaseResult::Halt(next) => return self.halted(next, idx),
            }
        }

        PipelineOutcome::Ok(blueprint)
    }

    pub fn schema(&self) -> Option<&'schema Schema> {
        self.schema
    }

    /// Makes `schema` available to every phase through
    /// [`PhaseContext::schema`].
    pub fn with_schema(mut self, schema: &'schema Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    fn halted(&self, blueprint: Blueprint, idx: usize) -> PipelineOutcome {
        let phase = self.phases[idx].id();
        log::debug!(
            "Pipeline halted at the `{phase}` phase with {} errors.",
            blueprint.error_count(),
        );
        PipelineOutcome::Halted {
            blueprint,
            phase,
            remaining: self.phases[idx + 1..].iter().map(|p| p.id()).collect(),
        }
    }
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("options", &self.options)
            .field("phases", &self.phase_ids())
            .field("schema", &self.schema.is_some())
            .finish()
    }
}
