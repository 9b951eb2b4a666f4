use serde::Serialize;

/// Discriminant identifying what a [`Node`](crate::Node) represents.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum NodeKind {
    Document,

    // Executable document nodes
    Argument,
    Directive,
    Field,
    Fragment,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    VariableDefinition,

    // Schema document nodes
    DirectiveDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    FieldDefinition,
    InputObjectTypeDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    ObjectTypeDefinition,
    ScalarTypeDefinition,
    SchemaDefinition,
    TypeExtension,
    UnionTypeDefinition,
}
impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Argument => "Argument",
            Self::Directive => "Directive",
            Self::Field => "Field",
            Self::Fragment => "Fragment",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::OperationDefinition => "OperationDefinition",
            Self::VariableDefinition => "VariableDefinition",
            Self::DirectiveDefinition => "DirectiveDefinition",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::FieldDefinition => "FieldDefinition",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::SchemaDefinition => "SchemaDefinition",
            Self::TypeExtension => "TypeExtension",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
        }
    }

    /// True for the kinds that define a named type in a schema document.
    pub fn is_type_definition(&self) -> bool {
        matches!(
            self,
            Self::EnumTypeDefinition
                | Self::InputObjectTypeDefinition
                | Self::InterfaceTypeDefinition
                | Self::ObjectTypeDefinition
                | Self::ScalarTypeDefinition
                | Self::UnionTypeDefinition
        )
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
