#[allow(clippy::module_inception)]
mod pipeline;
mod pipeline_error;
mod pipeline_options;
mod pipeline_outcome;

pub use pipeline::Pipeline;
pub use pipeline_error::PipelineError;
pub use pipeline_options::PipelineOptions;
pub use pipeline_outcome::PipelineOutcome;
