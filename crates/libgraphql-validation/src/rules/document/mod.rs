mod fields_on_correct_type;
mod known_fragment_names;
mod lone_anonymous_operation;
mod no_unused_fragments;
mod unique_argument_names;
mod unique_fragment_names;
mod unique_operation_names;
mod unique_variable_names;

pub use fields_on_correct_type::FieldsOnCorrectType;
pub use known_fragment_names::KnownFragmentNames;
pub use lone_anonymous_operation::LoneAnonymousOperation;
pub use no_unused_fragments::NoUnusedFragments;
pub use unique_argument_names::UniqueArgumentNames;
pub use unique_fragment_names::UniqueFragmentNames;
pub use unique_operation_names::UniqueOperationNames;
pub use unique_variable_names::UniqueVariableNames;
