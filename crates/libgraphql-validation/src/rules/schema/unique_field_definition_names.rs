use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::rules;

/// Within a single type definition (or extension), each field and input
/// field name may only be used once.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueFieldDefinitionNames;
impl UniqueFieldDefinitionNames {
    pub const ID: PhaseId = PhaseId::new("Schema.Validation.UniqueFieldDefinitionNames");
}

#[inherent::inherent]
impl Phase for UniqueFieldDefinitionNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        for type_node in blueprint.root_mut().children_mut() {
            let is_type_node =
                type_node.kind().is_type_definition()
                    || type_node.kind() == NodeKind::TypeExtension;
            if !is_type_node {
                continue;
            }

            let type_name = type_node.name().unwrap_or_default().to_string();
            rules::report_repeated_names(
                type_node.children_mut()
                    .iter_mut()
                    .filter(|child| matches!(
                        child.kind(),
                        NodeKind::FieldDefinition | NodeKind::InputValueDefinition,
                    ))
                    .collect(),
                true,
                |field_name, locations| Diagnostic::new(
                    Self::ID,
                    format!("Field \"{type_name}.{field_name}\" can only be defined once."),
                ).with_locations(locations),
            );
        }
        PhaseResult::Continue(blueprint)
    }
}
