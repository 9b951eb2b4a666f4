use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::rules;

/// An operation may not define two variables with the same name.
///
/// https://spec.graphql.org/October2021/#sec-Variable-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueVariableNames;
impl UniqueVariableNames {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.UniqueVariableNames");
}

#[inherent::inherent]
impl Phase for UniqueVariableNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let operations =
            blueprint.root_mut()
                .children_mut()
                .iter_mut()
                .filter(|node| node.kind() == NodeKind::OperationDefinition);
        for op in operations {
            rules::report_repeated_names(
                op.children_mut()
                    .iter_mut()
                    .filter(|node| node.kind() == NodeKind::VariableDefinition)
                    .collect(),
                false,
                |name, locations| Diagnostic::new(
                    Self::ID,
                    format!("There can only be one variable named \"{name}\"."),
                ).with_locations(locations),
            );
        }
        PhaseResult::Continue(blueprint)
    }
}
