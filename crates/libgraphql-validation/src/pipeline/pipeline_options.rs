/// Options that every phase of a pipeline run can read via
/// [`PhaseContext`](crate::phase::PhaseContext).
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOptions {
    /// Name of the operation to treat as the current operation when a
    /// document defines more than one.
    pub operation_name: Option<String>,

    /// Whether [`PhaseResult::Jump`](crate::phase::PhaseResult::Jump) moves
    /// the pipeline forward to its target phase. When disabled, a jump halts
    /// the pipeline.
    pub jump_phases: bool,
}
impl PipelineOptions {
    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_jump_phases(mut self, jump_phases: bool) -> Self {
        self.jump_phases = jump_phases;
        self
    }
}
impl std::default::Default for PipelineOptions {
    fn default() -> Self {
        Self {
            operation_name: None,
            jump_phases: true,
        }
    }
}
