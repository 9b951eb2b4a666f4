use crate::NodeKind;
use crate::PipelineOptions;
use crate::harness;
use crate::harness::Check;
use crate::harness::bad_value;
use crate::rules::document::UniqueFragmentNames;

#[test]
fn many_fragments_with_different_names() {
    harness::assert_passes_rule(
        UniqueFragmentNames,
        "{ dog { ...fragA ...fragB } }\n\
        fragment fragA on Dog { name }\n\
        fragment fragB on Dog { barks }",
        PipelineOptions::default(),
    );
}

#[test]
fn inline_fragments_are_always_unique() {
    harness::assert_passes_rule(
        UniqueFragmentNames,
        "{ pet { ... on Dog { name } ... on Dog { barks } } }",
        PipelineOptions::default(),
    );
}

#[test]
fn fragments_named_the_same() {
    harness::assert_fails_rule(
        UniqueFragmentNames,
        "{ dog { ...fragA } }\n\
        fragment fragA on Dog { name }\n\
        fragment fragA on Dog { barks }",
        PipelineOptions::default(),
        vec![bad_value(
            UniqueFragmentNames::ID,
            NodeKind::Fragment,
            "There can only be one fragment named \"fragA\".",
            3,
            Check::field_equals([("type_condition", "Dog")]),
        )],
    );
}
