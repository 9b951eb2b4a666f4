use crate::Blueprint;
use crate::Phase;
use crate::PipelineOptions;
use crate::blueprint::ParsedInput;
use crate::loc::SourceLocation;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::phases::DocumentResult;
use crate::phases::ParseDocument;
use crate::phases::ParseSchema;

fn run_phase(phase: &dyn Phase, source: &str) -> PhaseResult {
    let options = PipelineOptions::default();
    let ctx = PhaseContext {
        schema: None,
        options: &options,
    };
    phase.run(Blueprint::new(source), &ctx)
}

#[test]
fn parse_document_stores_parsed_input() {
    let PhaseResult::Continue(blueprint) =
        run_phase(&ParseDocument, "query Foo { dog { name } }") else {
        panic!("Expected the parse to succeed");
    };

    assert!(matches!(blueprint.input(), Some(ParsedInput::Executable(_))));
    assert_eq!(blueprint.error_count(), 0);
    assert!(blueprint.root().children().is_empty());
}

#[test]
fn parse_document_syntax_error_jumps_to_document_result() {
    let result = run_phase(&ParseDocument, "query Foo {\n  dog {\n    name\n}");
    let PhaseResult::Jump { blueprint, to } = result else {
        panic!("Expected a jump");
    };

    assert_eq!(to, DocumentResult::ID);
    assert!(blueprint.input().is_none());

    let errors = blueprint.root().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].phase(), ParseDocument::ID);
    assert!(!errors[0].message().is_empty());
    assert!(!errors[0].message().ends_with('\n'));
}

#[test]
fn parse_document_syntax_error_is_located() {
    let result = run_phase(&ParseDocument, "query Foo {\n  dog(: 1)\n}");
    let PhaseResult::Jump { blueprint, .. } = result else {
        panic!("Expected a jump");
    };

    let errors = blueprint.root().errors();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].has_line(2),
        "Expected a location on line 2: {:?}",
        errors[0],
    );
}

#[test]
fn parse_document_rejects_schema_definitions() {
    let result = run_phase(&ParseDocument, "type Foo { a: Int }");
    assert!(matches!(result, PhaseResult::Jump { .. }));
}

#[test]
fn parse_schema_stores_parsed_input() {
    let PhaseResult::Continue(blueprint) =
        run_phase(&ParseSchema, "type Foo { a: Int }") else {
        panic!("Expected the parse to succeed");
    };

    assert!(matches!(blueprint.input(), Some(ParsedInput::Schema(_))));
}

#[test]
fn parse_schema_syntax_error_halts() {
    let result = run_phase(&ParseSchema, "type Foo {");
    let PhaseResult::Halt(blueprint) = result else {
        panic!("Expected a halt");
    };

    let errors = blueprint.root().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].phase(), ParseSchema::ID);
}

#[test]
fn location_is_read_from_parse_error_messages() {
    assert_eq!(
        SourceLocation::from_parse_error_message("query parse error: Parse error at 2:7\nUnexpected `:`"),
        Some(SourceLocation::new(2, 7)),
    );
    assert_eq!(
        SourceLocation::from_parse_error_message("Parse error at 1:1"),
        Some(SourceLocation::new(1, 1)),
    );
    assert_eq!(SourceLocation::from_parse_error_message("Unexpected end of input"), None);
    assert_eq!(SourceLocation::from_parse_error_message("error at nowhere"), None);
}
