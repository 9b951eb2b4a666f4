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
use crate::schema::OperationKind;

/// Every selected field must be defined on the type it is selected from.
///
/// Selections whose parent type can not be resolved (e.g. fields below an
/// already-unknown field, or under an unknown type condition) are skipped so
/// that a single mistake is only reported once. Selections below scalars and
/// enums are left to leaf-field checks.
///
/// https://spec.graphql.org/October2021/#sec-Field-Selections
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldsOnCorrectType;
impl FieldsOnCorrectType {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.FieldsOnCorrectType");

    fn visit_selections(schema: &Schema, node: &mut Node, parent_type: Option<&str>) {
        for child in node.children_mut() {
            match child.kind() {
                NodeKind::Field => {
                    let field_type = match parent_type {
                        Some(parent_type) => Self::check_field(schema, child, parent_type),
                        None => None,
                    };
                    Self::visit_selections(schema, child, field_type.as_deref());
                },

                NodeKind::InlineFragment => {
                    let type_condition =
                        child.attr("type_condition")
                            .and_then(AttrValue::as_str)
                            .map(str::to_string);
                    Self::visit_selections(
                        schema,
                        child,
                        type_condition.as_deref().or(parent_type),
                    );
                },

                _ => (),
            }
        }
    }

    /// Reports `field` if the composite `parent_type` does not define it and
    /// returns the field's type otherwise.
    fn check_field(schema: &Schema, field: &mut Node, parent_type: &str) -> Option<String> {
        let field_name = field.name().unwrap_or_default().to_string();
        if field_name == "__typename" {
            return None;
        }

        if let Some(field_type) = schema.field_type(parent_type, &field_name) {
            return Some(field_type.to_string());
        }

        if schema.is_composite(parent_type) {
            let location = field.location();
            field.add_error(Diagnostic::at(
                Self::ID,
                format!("Cannot query field \"{field_name}\" on type \"{parent_type}\"."),
                location,
            ));
        }
        None
    }
}

#[inherent::inherent]
impl Phase for FieldsOnCorrectType {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, ctx: &PhaseContext<'_>) -> PhaseResult {
        let Some(schema) = ctx.schema else {
            log::warn!("Skipping the `{}` phase: No schema was provided.", Self::ID);
            return PhaseResult::Continue(blueprint);
        };

        let mut blueprint = blueprint;
        for def in blueprint.root_mut().children_mut() {
            let parent_type = match def.kind() {
                NodeKind::OperationDefinition =>
                    def.attr("operation")
                        .and_then(AttrValue::as_str)
                        .and_then(OperationKind::from_keyword)
                        .and_then(|kind| schema.root_type(kind))
                        .map(str::to_string),

                NodeKind::Fragment =>
                    def.attr("type_condition")
                        .and_then(AttrValue::as_str)
                        .map(str::to_string),

                _ => continue,
            };
            Self::visit_selections(schema, def, parent_type.as_deref());
        }
        PhaseResult::Continue(blueprint)
    }
}
