use crate::Blueprint;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;

/// The final phase of a document pipeline. Records whether the document came
/// through validation cleanly as the root's `valid` attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentResult;
impl DocumentResult {
    pub const ID: PhaseId = PhaseId::new("Document.Result");
}

#[inherent::inherent]
impl Phase for DocumentResult {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let valid = blueprint.error_count() == 0;
        blueprint.root_mut().set_attr("valid", valid);
        PhaseResult::Continue(blueprint)
    }
}
