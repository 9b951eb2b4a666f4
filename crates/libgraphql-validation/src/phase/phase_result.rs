use crate::Blueprint;
use crate::phase::PhaseId;

/// What a [`Phase`](crate::Phase) tells the pipeline to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum PhaseResult {
    /// Proceed with the next phase.
    Continue(Blueprint),

    /// Skip ahead to the phase with the given id. When the pipeline runs
    /// with `jump_phases` disabled (or the target is not ahead of the current
    /// phase) this halts the pipeline instead.
    Jump {
        blueprint: Blueprint,
        to: PhaseId,
    },

    /// Stop the pipeline.
    Halt(Blueprint),
}
