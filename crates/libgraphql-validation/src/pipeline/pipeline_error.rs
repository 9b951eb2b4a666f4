use crate::PhaseId;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error(
        "The `{phase}` phase is not part of this pipeline. Known phases: {}",
        known_phases.iter()
            .map(|id| format!("`{id}`"))
            .collect::<Vec<_>>()
            .join(", "),
    )]
    UnknownPhase {
        phase: PhaseId,
        known_phases: Vec<PhaseId>,
    },
}
