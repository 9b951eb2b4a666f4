use crate::Blueprint;
use crate::phase::PhaseContext;
use crate::phase::PhaseId;
use crate::phase::PhaseResult;

/// A single named step of a [`Pipeline`](crate::Pipeline).
///
/// Phases take ownership of the [`Blueprint`] produced by the previous phase
/// and hand back a (possibly modified) blueprint along with an instruction
/// for how the pipeline should proceed.
pub trait Phase: Send + Sync {
    fn id(&self) -> PhaseId;

    fn run(&self, blueprint: Blueprint, ctx: &PhaseContext<'_>) -> PhaseResult;
}
