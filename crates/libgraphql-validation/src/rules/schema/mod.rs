mod known_type_names;
mod unique_field_definition_names;
mod unique_type_names;

pub use known_type_names::KnownTypeNames;
pub use unique_field_definition_names::UniqueFieldDefinitionNames;
pub use unique_type_names::UniqueTypeNames;
