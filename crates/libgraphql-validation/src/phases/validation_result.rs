use crate::Blueprint;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::phases::DocumentResult;

/// Runs after every validation rule of a pipeline and stops it if any of
/// those rules attached a diagnostic.
///
/// The document flavor jumps to [`DocumentResult`]; the schema flavor halts.
#[derive(Clone, Copy, Debug)]
pub struct ValidationResult {
    id: PhaseId,
    jump_to: Option<PhaseId>,
}
impl ValidationResult {
    pub const DOCUMENT_ID: PhaseId = PhaseId::new("Document.Validation.Result");
    pub const SCHEMA_ID: PhaseId = PhaseId::new("Schema.Validation.Result");

    pub fn document() -> Self {
        Self {
            id: Self::DOCUMENT_ID,
            jump_to: Some(DocumentResult::ID),
        }
    }

    pub fn schema() -> Self {
        Self {
            id: Self::SCHEMA_ID,
            jump_to: None,
        }
    }
}

#[inherent::inherent]
impl Phase for ValidationResult {
    pub fn id(&self) -> PhaseId {
        self.id
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let num_errors = blueprint.error_count();
        if num_errors == 0 {
            return PhaseResult::Continue(blueprint);
        }

        log::debug!("The `{}` phase found {num_errors} errors.", self.id);
        match self.jump_to {
            Some(to) => PhaseResult::Jump { blueprint, to },
            None => PhaseResult::Halt(blueprint),
        }
    }
}
