use crate::Phase;
use crate::PipelineOptions;
use crate::Schema;
use crate::harness::DiagnosticPair;
use crate::harness::Expectation;
use crate::harness::ExpectationFailure;
use crate::harness::ValidationMode;
use crate::harness::fixtures;
use crate::harness::flatten;
use crate::harness::runner;
use std::sync::Arc;

/// Checks that `pairs` is empty.
pub fn check_no_errors(pairs: &[DiagnosticPair<'_>]) -> Result<(), ExpectationFailure> {
    if pairs.is_empty() {
        Ok(())
    } else {
        Err(ExpectationFailure::UnexpectedErrors {
            found: pairs.iter()
                .map(|pair| pair.diagnostic.message().to_string())
                .collect(),
        })
    }
}

/// Asserts that running `rules` over `document` produces no diagnostics at
/// all.
pub fn assert_valid(
    schema: &Schema,
    rules: &[Arc<dyn Phase>],
    document: &str,
    mode: impl Into<ValidationMode>,
) {
    let blueprint = runner::run(schema, rules, document, &mode.into()).into_blueprint();
    let pairs = flatten(blueprint.root());
    if let Err(failure) = check_no_errors(&pairs) {
        panic!("{failure}\n\nDocument:\n{document}");
    }
}

/// Asserts that running `rules` over `document` produces diagnostics
/// satisfying each of `expectations`.
///
/// Every expectation is checked independently against all diagnostics found,
/// so a single diagnostic may satisfy more than one expectation.
pub fn assert_invalid(
    schema: &Schema,
    rules: &[Arc<dyn Phase>],
    document: &str,
    mode: impl Into<ValidationMode>,
    expectations: impl IntoIterator<Item = Expectation>,
) {
    let blueprint = runner::run(schema, rules, document, &mode.into()).into_blueprint();
    let pairs = flatten(blueprint.root());
    for expectation in expectations {
        if let Err(failure) = expectation.evaluate(&pairs) {
            panic!("{failure}\n\nDocument:\n{document}");
        }
    }
}

/// [`assert_valid`] for a single `rule` against the
/// [pets schema](fixtures::pets_schema).
pub fn assert_passes_rule(
    rule: impl Phase + 'static,
    document: &str,
    options: PipelineOptions,
) {
    assert_passes_rule_with_schema(fixtures::pets_schema(), rule, document, options);
}

/// [`assert_invalid`] for a single `rule` against the
/// [pets schema](fixtures::pets_schema).
pub fn assert_fails_rule(
    rule: impl Phase + 'static,
    document: &str,
    options: PipelineOptions,
    expectations: impl IntoIterator<Item = Expectation>,
) {
    assert_fails_rule_with_schema(
        fixtures::pets_schema(),
        rule,
        document,
        options,
        expectations,
    );
}

/// [`assert_passes_rule`] against a caller-provided `schema`.
pub fn assert_passes_rule_with_schema(
    schema: &Schema,
    rule: impl Phase + 'static,
    document: &str,
    options: PipelineOptions,
) {
    let rule: Arc<dyn Phase> = Arc::new(rule);
    assert_valid(schema, &[rule], document, options);
}

/// [`assert_fails_rule`] against a caller-provided `schema`.
pub fn assert_fails_rule_with_schema(
    schema: &Schema,
    rule: impl Phase + 'static,
    document: &str,
    options: PipelineOptions,
    expectations: impl IntoIterator<Item = Expectation>,
) {
    let rule: Arc<dyn Phase> = Arc::new(rule);
    assert_invalid(schema, &[rule], document, options, expectations);
}

/// [`assert_valid`] for a single `rule` over a schema (SDL) document.
pub fn assert_passes_schema_rule(rule: impl Phase + 'static, sdl: &str) {
    let rule: Arc<dyn Phase> = Arc::new(rule);
    assert_valid(
        fixtures::pets_schema(),
        &[rule],
        sdl,
        ValidationMode::Schema,
    );
}

/// [`assert_invalid`] for a single `rule` over a schema (SDL) document.
pub fn assert_fails_schema_rule(
    rule: impl Phase + 'static,
    sdl: &str,
    expectations: impl IntoIterator<Item = Expectation>,
) {
    let rule: Arc<dyn Phase> = Arc::new(rule);
    assert_invalid(
        fixtures::pets_schema(),
        &[rule],
        sdl,
        ValidationMode::Schema,
        expectations,
    );
}
