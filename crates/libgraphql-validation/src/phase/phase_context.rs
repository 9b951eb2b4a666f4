use crate::PipelineOptions;
use crate::Schema;

/// Read-only state shared with every phase of a single pipeline run.
#[derive(Clone, Copy, Debug)]
pub struct PhaseContext<'a> {
    /// The schema that executable documents are validated against. Schema
    /// pipelines only have one if it was attached with
    /// [`Pipeline::with_schema`](crate::Pipeline::with_schema).
    pub schema: Option<&'a Schema>,
    pub options: &'a PipelineOptions,
}
