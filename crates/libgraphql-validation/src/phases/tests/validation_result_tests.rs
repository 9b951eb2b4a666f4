use crate::Blueprint;
use crate::Diagnostic;
use crate::Node;
use crate::NodeKind;
use crate::PhaseId;
use crate::PipelineOptions;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::phases::DocumentResult;
use crate::phases::ValidationResult;

fn blueprint_with_errors(num_errors: usize) -> Blueprint {
    let mut blueprint = Blueprint::new("{ dog { name } }");
    let mut field = Node::new(NodeKind::Field).with_attr("name", "dog");
    for _ in 0..num_errors {
        field.add_error(Diagnostic::new(PhaseId::new("Test.Rule"), "Bad field"));
    }
    blueprint.root_mut().children_mut().push(field);
    blueprint
}

fn run(phase: ValidationResult, blueprint: Blueprint) -> PhaseResult {
    let options = PipelineOptions::default();
    phase.run(blueprint, &PhaseContext {
        schema: None,
        options: &options,
    })
}

#[test]
fn clean_blueprint_continues() {
    assert!(matches!(
        run(ValidationResult::document(), blueprint_with_errors(0)),
        PhaseResult::Continue(_),
    ));
    assert!(matches!(
        run(ValidationResult::schema(), blueprint_with_errors(0)),
        PhaseResult::Continue(_),
    ));
}

#[test]
fn document_flavor_jumps_to_document_result() {
    let result = run(ValidationResult::document(), blueprint_with_errors(2));
    let PhaseResult::Jump { blueprint, to } = result else {
        panic!("Expected a jump");
    };
    assert_eq!(to, DocumentResult::ID);
    assert_eq!(blueprint.error_count(), 2);
}

#[test]
fn schema_flavor_halts() {
    assert!(matches!(
        run(ValidationResult::schema(), blueprint_with_errors(1)),
        PhaseResult::Halt(_),
    ));
}

#[test]
fn ids_differ_per_flavor() {
    assert_eq!(ValidationResult::document().id(), ValidationResult::DOCUMENT_ID);
    assert_eq!(ValidationResult::schema().id(), ValidationResult::SCHEMA_ID);
}
