use crate::AttrValue;
use crate::Blueprint;
use crate::Diagnostic;
use crate::Node;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::Schema;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use std::collections::HashSet;

/// Every type a schema refers to must be either a built-in scalar or defined
/// somewhere in the document. That covers field, argument, and input field
/// types, root operation types, union members, and implemented interfaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownTypeNames;
impl KnownTypeNames {
    pub const ID: PhaseId = PhaseId::new("Schema.Validation.KnownTypeNames");

    /// The type names `node` refers to directly.
    fn referenced_types(node: &Node) -> Vec<&str> {
        let attr_names: &[&str] = match node.kind() {
            NodeKind::FieldDefinition | NodeKind::InputValueDefinition => &["type_name"],
            NodeKind::InterfaceTypeDefinition | NodeKind::ObjectTypeDefinition => &["interfaces"],
            NodeKind::SchemaDefinition => &["query", "mutation", "subscription"],
            NodeKind::UnionTypeDefinition => &["types"],
            _ => &[],
        };

        attr_names.iter()
            .filter_map(|attr_name| node.attr(attr_name))
            .flat_map(|value| match value.as_list() {
                Some(items) => items.iter().filter_map(AttrValue::as_str).collect(),
                None => value.as_str().into_iter().collect::<Vec<_>>(),
            })
            .collect()
    }
}

#[inherent::inherent]
impl Phase for KnownTypeNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let known_types: HashSet<String> =
            blueprint.root()
                .children()
                .iter()
                .filter(|node| node.kind().is_type_definition())
                .filter_map(|node| node.name().map(str::to_string))
                .chain(Schema::BUILTIN_SCALARS.iter().map(|name| name.to_string()))
                .collect();

        blueprint.root_mut().prewalk_mut(&mut |node| {
            let errors: Vec<Diagnostic> =
                Self::referenced_types(node)
                    .into_iter()
                    .filter(|type_name| !known_types.contains(*type_name))
                    .map(|type_name| Diagnostic::at(
                        Self::ID,
                        format!("Unknown type \"{type_name}\"."),
                        node.location(),
                    ))
                    .collect();
            for error in errors {
                node.add_error(error);
            }
        });
        PhaseResult::Continue(blueprint)
    }
}
