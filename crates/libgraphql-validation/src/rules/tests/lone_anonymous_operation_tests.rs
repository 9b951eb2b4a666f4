use crate::NodeKind;
use crate::PipelineOptions;
use crate::harness;
use crate::harness::Check;
use crate::harness::bad_value;
use crate::rules::document::LoneAnonymousOperation;

const MESSAGE: &str = "This anonymous operation must be the only defined operation.";

#[test]
fn one_anon_operation() {
    harness::assert_passes_rule(
        LoneAnonymousOperation,
        "{ dog { name } }",
        PipelineOptions::default(),
    );
}

#[test]
fn anon_operation_with_fragment() {
    harness::assert_passes_rule(
        LoneAnonymousOperation,
        "{ dog { ...Foo } }\nfragment Foo on Dog { name }",
        PipelineOptions::default(),
    );
}

#[test]
fn multiple_named_operations() {
    harness::assert_passes_rule(
        LoneAnonymousOperation,
        "query Foo { dog { name } }\nquery Bar { dog { name } }",
        PipelineOptions::default(),
    );
}

#[test]
fn anon_operation_with_another_operation() {
    harness::assert_fails_rule(
        LoneAnonymousOperation,
        "{\n  dog { name }\n}\nmutation Foo {\n  adoptDog(name: \"Rex\") { name }\n}",
        PipelineOptions::default(),
        vec![bad_value(
            LoneAnonymousOperation::ID,
            NodeKind::OperationDefinition,
            MESSAGE,
            1,
            Check::field_equals([("operation", "query")]),
        )],
    );
}

#[test]
fn multiple_anon_operations() {
    harness::assert_fails_rule(
        LoneAnonymousOperation,
        "{ dog { name } }\n{ cat { name } }",
        PipelineOptions::default(),
        vec![
            bad_value(
                LoneAnonymousOperation::ID,
                NodeKind::OperationDefinition,
                MESSAGE,
                1,
                Check::None,
            ),
            bad_value(
                LoneAnonymousOperation::ID,
                NodeKind::OperationDefinition,
                MESSAGE,
                2,
                Check::None,
            ),
        ],
    );
}
