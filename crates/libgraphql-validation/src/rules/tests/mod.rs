mod lone_anonymous_operation_tests;
mod no_unused_fragments_tests;
mod unique_fragment_names_tests;
