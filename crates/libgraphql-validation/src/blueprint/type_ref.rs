use crate::ast;

/// Renders a type annotation the way it is written in GraphQL source (e.g.
/// `[String!]!`).
pub(super) fn type_annotation_str(ty: &ast::query::Type) -> String {
    match ty {
        ast::query::Type::NamedType(name) => name.to_string(),
        ast::query::Type::ListType(inner) =>
            format!("[{}]", type_annotation_str(inner)),
        ast::query::Type::NonNullType(inner) =>
            format!("{}!", type_annotation_str(inner)),
    }
}

/// Strips list and non-null wrappers off of a type annotation.
pub(super) fn innermost_type_name(ty: &ast::query::Type) -> String {
    match ty {
        ast::query::Type::NamedType(name) => name.to_string(),
        ast::query::Type::ListType(inner)
            | ast::query::Type::NonNullType(inner) => innermost_type_name(inner),
    }
}
