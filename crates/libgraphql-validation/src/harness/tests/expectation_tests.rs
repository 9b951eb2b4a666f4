use crate::AttrValue;
use crate::Blueprint;
use crate::Diagnostic;
use crate::Node;
use crate::NodeKind;
use crate::Phase;
use crate::harness::Check;
use crate::harness::DiagnosticPair;
use crate::harness::ExpectationFailure;
use crate::harness::Line;
use crate::harness::ValidationMode;
use crate::harness::bad_value;
use crate::harness::fixtures;
use crate::harness::flatten;
use crate::harness::tests::test_rules::TwoLocationRule;
use crate::harness::tests::test_rules::UnknownFieldRule;
use crate::loc::SourceLocation;
use std::sync::Arc;

fn run_rule(rule: impl Phase + 'static, document: &str) -> Blueprint {
    let rule: Arc<dyn Phase> = Arc::new(rule);
    crate::harness::run(
        fixtures::pets_schema(),
        &[rule],
        document,
        &ValidationMode::default(),
    ).into_blueprint()
}

#[test]
fn line_any_matches_diagnostics_without_locations() {
    let diagnostic = Diagnostic::new(UnknownFieldRule::ID, "Unknown field");
    assert!(Line::Any.matches(&diagnostic));
    assert!(!Line::At(1).matches(&diagnostic));
}

#[test]
fn line_all_requires_every_listed_line() {
    let diagnostic =
        Diagnostic::new(UnknownFieldRule::ID, "Unknown field")
            .with_locations([
                SourceLocation::new(1, 1),
                SourceLocation::new(3, 5),
            ]);

    assert!(Line::from([1, 3]).matches(&diagnostic));
    assert!(Line::from(3).matches(&diagnostic));
    assert!(!Line::from([1, 2]).matches(&diagnostic));
    assert!(!Line::from(vec![2]).matches(&diagnostic));
}

#[test]
fn line_converts_from_option() {
    assert_eq!(Line::from(None), Line::Any);
    assert_eq!(Line::from(Some(4)), Line::At(4));
}

#[test]
fn field_equals_check_compares_attributes() {
    let node =
        Node::new(NodeKind::Field)
            .with_attr("name", "dog")
            .with_attr("foo", 1);

    assert!(Check::field_equals([("foo", 1)]).matches(&node));
    assert!(Check::field_equals([("name", "dog")]).matches(&node));
    assert!(!Check::field_equals([("foo", 2)]).matches(&node));
    assert!(!Check::field_equals([("bar", 1)]).matches(&node));
}

#[test]
fn predicate_check_runs_the_predicate() {
    let node = Node::new(NodeKind::Field).with_attr("name", "dog");
    let check = Check::predicate(|node| node.name() == Some("dog"));
    assert!(check.matches(&node));

    let check = Check::predicate(|node| node.name() == Some("cat"));
    assert!(!check.matches(&node));
}

#[test]
fn expected_error_on_line_1_is_found() {
    let blueprint = run_rule(UnknownFieldRule, "{ field }");
    let pairs = flatten(blueprint.root());

    let expectation = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        1,
        Check::None,
    );
    assert_eq!(expectation.evaluate(&pairs), Ok(()));
}

#[test]
fn expected_error_on_wrong_line_is_not_found() {
    let blueprint = run_rule(UnknownFieldRule, "{ field }");
    let pairs = flatten(blueprint.root());

    let expectation = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        2,
        Check::None,
    );
    match expectation.evaluate(&pairs) {
        Err(ExpectationFailure::NotFound { banner, found }) => {
            assert_eq!(found, vec!["Unknown field".to_string()]);
            assert!(banner.contains("at line 2"), "banner: {banner}");
        },
        other => panic!("Expected a NotFound failure, got: {other:?}"),
    }
}

#[test]
fn expectation_is_scoped_to_node_kind_and_rule() {
    let blueprint = run_rule(UnknownFieldRule, "{ field }");
    let pairs = flatten(blueprint.root());

    let wrong_kind = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Fragment,
        "Unknown field",
        None,
        Check::None,
    );
    assert!(matches!(
        wrong_kind.evaluate(&pairs),
        Err(ExpectationFailure::NotFound { .. }),
    ));

    let wrong_rule = bad_value(
        TwoLocationRule::ID,
        NodeKind::Field,
        "Unknown field",
        None,
        Check::None,
    );
    assert!(matches!(
        wrong_rule.evaluate(&pairs),
        Err(ExpectationFailure::NotFound { .. }),
    ));
}

#[test]
fn message_must_match_exactly() {
    let blueprint = run_rule(UnknownFieldRule, "{ field }");
    let pairs = flatten(blueprint.root());

    let expectation = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown",
        1,
        Check::None,
    );
    assert!(expectation.evaluate(&pairs).is_err());
}

#[test]
fn check_narrows_which_node_may_carry_the_error() {
    let blueprint = run_rule(UnknownFieldRule, "{\n  first: field\n  second: field\n}");
    let pairs = flatten(blueprint.root());
    assert_eq!(pairs.len(), 2);

    bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        3,
        Check::field_equals([("alias", "second")]),
    ).assert(&pairs);

    // `second` is on line 3, so no single node satisfies both conditions.
    let mismatched = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        2,
        Check::field_equals([("alias", "second")]),
    );
    assert!(mismatched.evaluate(&pairs).is_err());

    bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        None,
        Check::predicate(|node| {
            node.attr("alias").and_then(AttrValue::as_str) == Some("first")
        }),
    ).assert(&pairs);
}

#[test]
fn multi_location_diagnostic_matches_line_all() {
    let blueprint = run_rule(TwoLocationRule, "{\n  dog {\n    name\n  }\n}");
    let pairs = flatten(blueprint.root());

    bad_value(
        TwoLocationRule::ID,
        NodeKind::Field,
        "Two locations",
        [1, 3],
        Check::field_equals([("name", "name")]),
    ).assert(&pairs);

    let missing_line = bad_value(
        TwoLocationRule::ID,
        NodeKind::Field,
        "Two locations",
        [1, 4],
        Check::None,
    );
    assert!(missing_line.evaluate(&pairs).is_err());
}

#[test]
fn no_errors_at_all_is_its_own_failure() {
    let pairs: Vec<DiagnosticPair<'_>> = vec![];
    let expectation = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        1,
        Check::None,
    );

    let failure = expectation.evaluate(&pairs).unwrap_err();
    assert!(matches!(failure, ExpectationFailure::NoErrorsFound { .. }));
    assert_eq!(
        failure.to_string(),
        "No errors found, but expected:\n  a Field error from \
        `Test.UnknownFieldRule` at line 1: \"Unknown field\"",
    );
}

#[test]
fn banner_describes_the_check() {
    let expectation = bad_value(
        UnknownFieldRule::ID,
        NodeKind::Field,
        "Unknown field",
        [1, 2],
        Check::field_equals([("foo", 1)]),
    );
    assert_eq!(
        expectation.banner(),
        "  a Field error from `Test.UnknownFieldRule` at lines 1, 2: \
        \"Unknown field\"\n  on a node with foo = 1",
    );
}
