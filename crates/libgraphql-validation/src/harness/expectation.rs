use crate::NodeKind;
use crate::PhaseId;
use crate::harness::Check;
use crate::harness::DiagnosticPair;
use crate::harness::ExpectationFailure;
use crate::harness::Line;

/// A diagnostic that a test expects the rule under test to produce.
///
/// Built with [`bad_value`].
#[derive(Debug)]
pub struct Expectation {
    rule: PhaseId,
    node_kind: NodeKind,
    message: String,
    line: Line,
    check: Check,
}

/// Expects the `rule` phase to have attached a diagnostic with exactly
/// `message` to a `node_kind` node.
///
/// `line` is anything that converts to a [`Line`]: a single line number,
/// a list or array of line numbers (all of which must be present), or
/// `None` to skip the line check.
pub fn bad_value(
    rule: PhaseId,
    node_kind: NodeKind,
    message: impl Into<String>,
    line: impl Into<Line>,
    check: Check,
) -> Expectation {
    Expectation {
        rule,
        node_kind,
        message: message.into(),
        line: line.into(),
        check,
    }
}

impl Expectation {
    /// Human-readable description of what this expectation looks for.
    pub fn banner(&self) -> String {
        let mut banner = format!(
            "  a {} error from `{}` at {}: {:?}",
            self.node_kind,
            self.rule,
            self.line,
            self.message,
        );
        if !matches!(self.check, Check::None) {
            banner.push_str(&format!("\n  on a node {}", self.check));
        }
        banner
    }

    pub fn matches(&self, pair: &DiagnosticPair<'_>) -> bool {
        pair.node.kind() == self.node_kind
            && pair.diagnostic.phase() == self.rule
            && pair.diagnostic.message() == self.message
            && self.check.matches(pair.node)
            && self.line.matches(pair.diagnostic)
    }

    /// Checks that at least one of `pairs` satisfies this expectation.
    pub fn evaluate(&self, pairs: &[DiagnosticPair<'_>]) -> Result<(), ExpectationFailure> {
        if pairs.is_empty() {
            return Err(ExpectationFailure::NoErrorsFound {
                banner: self.banner(),
            });
        }

        if pairs.iter().any(|pair| self.matches(pair)) {
            Ok(())
        } else {
            Err(ExpectationFailure::NotFound {
                banner: self.banner(),
                found: pairs.iter()
                    .map(|pair| pair.diagnostic.message().to_string())
                    .collect(),
            })
        }
    }

    /// Same as [`Expectation::evaluate`], but panics on failure.
    pub fn assert(&self, pairs: &[DiagnosticPair<'_>]) {
        if let Err(failure) = self.evaluate(pairs) {
            panic!("{failure}");
        }
    }

    pub fn rule(&self) -> PhaseId {
        self.rule
    }
}
