#[allow(clippy::module_inception)]
mod phase;
mod phase_context;
mod phase_id;
mod phase_result;

pub use phase::Phase;
pub use phase_context::PhaseContext;
pub use phase_id::PhaseId;
pub use phase_result::PhaseResult;
