use crate::Phase;
use crate::Pipeline;
use crate::PipelineOptions;
use crate::PipelineOutcome;
use crate::Schema;
use crate::phases::BuildSchema;
use crate::phases::ValidationResult;
use regex::Regex;
use std::sync::Arc;
use std::sync::OnceLock;

/// What kind of document an assertion runs through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationMode {
    /// The document is a schema (SDL) document. The pre-validation phases
    /// are the schema pipeline's phases up to and including
    /// [`BuildSchema`].
    Schema,

    /// The document is an executable document. The pre-validation phases
    /// are the document pipeline's phases up to
    /// [`ValidationResult::DOCUMENT_ID`], minus every validation phase.
    Document(PipelineOptions),
}
impl std::default::Default for ValidationMode {
    fn default() -> Self {
        Self::Document(PipelineOptions::default())
    }
}
impl std::convert::From<PipelineOptions> for ValidationMode {
    fn from(options: PipelineOptions) -> Self {
        Self::Document(options)
    }
}

fn validation_phase_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("Validation").expect("valid regex"))
}

/// Builds the phases that run ahead of the rules under test for `mode`.
pub fn pre_validation_pipeline<'schema>(
    schema: &'schema Schema,
    mode: &ValidationMode,
) -> Pipeline<'schema> {
    let prelude = match mode {
        ValidationMode::Schema =>
            Pipeline::for_schema(PipelineOptions::default())
                .with_schema(schema)
                .upto(BuildSchema::ID),

        ValidationMode::Document(options) =>
            Pipeline::for_document(schema, options.clone())
                .upto(ValidationResult::DOCUMENT_ID)
                .map(|pipeline| pipeline.reject(validation_phase_pattern())),
    };

    prelude.unwrap_or_else(|err| panic!(
        "Failed to build the pre-validation pipeline: {err}",
    ))
}

/// Runs `document` through the pre-validation phases for `mode` followed by
/// `rules`, in order.
///
/// In [`ValidationMode::Schema`], `schema` is still handed to every phase
/// through [`PhaseContext`](crate::phase::PhaseContext) so that rules can
/// consult an existing schema while validating a new one.
pub fn run(
    schema: &Schema,
    rules: &[Arc<dyn Phase>],
    document: &str,
    mode: &ValidationMode,
) -> PipelineOutcome {
    let pipeline = pre_validation_pipeline(schema, mode);
    log::debug!(
        "Running {} rule(s) after the pre-validation phases {:?}.",
        rules.len(),
        pipeline.phase_ids(),
    );
    pipeline.append(rules.iter().cloned()).run(document)
}
