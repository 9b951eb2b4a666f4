use crate::NodeKind;
use crate::PipelineOptions;
use crate::harness;
use crate::harness::Check;
use crate::harness::bad_value;
use crate::rules::document::NoUnusedFragments;

fn unused(name: &str, line: usize) -> harness::Expectation {
    bad_value(
        NoUnusedFragments::ID,
        NodeKind::Fragment,
        format!("Fragment \"{name}\" is never used."),
        line,
        Check::field_equals([("name", name)]),
    )
}

#[test]
fn all_fragment_names_are_used() {
    harness::assert_passes_rule(
        NoUnusedFragments,
        "{ human(id: 4) { ...HumanFields1 ... on Human { ...HumanFields2 } } }\n\
        fragment HumanFields1 on Human { name ...HumanFields3 }\n\
        fragment HumanFields2 on Human { name }\n\
        fragment HumanFields3 on Human { name }",
        PipelineOptions::default(),
    );
}

#[test]
fn all_fragment_names_are_used_by_multiple_operations() {
    harness::assert_passes_rule(
        NoUnusedFragments,
        "query Foo { human(id: 4) { ...HumanFields1 } }\n\
        query Bar { human(id: 4) { ...HumanFields2 } }\n\
        fragment HumanFields1 on Human { name ...HumanFields3 }\n\
        fragment HumanFields2 on Human { name }\n\
        fragment HumanFields3 on Human { name }",
        PipelineOptions::default(),
    );
}

#[test]
fn contains_unknown_fragments() {
    harness::assert_fails_rule(
        NoUnusedFragments,
        "query Foo { human(id: 4) { ...HumanFields1 } }\n\
        fragment HumanFields1 on Human { name ...HumanFields3 }\n\
        fragment HumanFields3 on Human { name }\n\
        fragment Unused1 on Human { name }\n\
        fragment Unused2 on Human { name }",
        PipelineOptions::default(),
        vec![unused("Unused1", 4), unused("Unused2", 5)],
    );
}

#[test]
fn contains_unknown_fragments_with_ref_cycle() {
    harness::assert_fails_rule(
        NoUnusedFragments,
        "query Foo { human(id: 4) { ...HumanFields1 } }\n\
        fragment HumanFields1 on Human { name ...HumanFields2 }\n\
        fragment HumanFields2 on Human { name ...HumanFields1 }\n\
        fragment Unused1 on Human { name ...Unused2 }\n\
        fragment Unused2 on Human { name ...Unused1 }",
        PipelineOptions::default(),
        vec![unused("Unused1", 4), unused("Unused2", 5)],
    );
}

#[test]
fn fragments_used_only_by_unused_fragments_are_unused() {
    harness::assert_fails_rule(
        NoUnusedFragments,
        "{ dog { name } }\n\
        fragment Unused on Dog { ...AlsoUnused }\n\
        fragment AlsoUnused on Dog { name }",
        PipelineOptions::default(),
        vec![unused("Unused", 2), unused("AlsoUnused", 3)],
    );
}
