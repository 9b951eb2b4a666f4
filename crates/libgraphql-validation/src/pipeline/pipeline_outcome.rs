use crate::Blueprint;
use crate::PhaseId;

/// The result of [`Pipeline::run`](crate::Pipeline::run).
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineOutcome {
    /// Every phase ran (or was jumped over) to the end of the pipeline.
    Ok(Blueprint),

    /// A phase stopped the pipeline early.
    Halted {
        blueprint: Blueprint,
        phase: PhaseId,
        remaining: Vec<PhaseId>,
    },
}
impl PipelineOutcome {
    pub fn blueprint(&self) -> &Blueprint {
        match self {
            Self::Ok(blueprint) => blueprint,
            Self::Halted { blueprint, .. } => blueprint,
        }
    }

    pub fn into_blueprint(self) -> Blueprint {
        match self {
            Self::Ok(blueprint) => blueprint,
            Self::Halted { blueprint, .. } => blueprint,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}
