use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::rules;

/// Operation names must be unique within a document.
///
/// https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueOperationNames;
impl UniqueOperationNames {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.UniqueOperationNames");
}

#[inherent::inherent]
impl Phase for UniqueOperationNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        rules::report_repeated_names(
            blueprint.root_mut()
                .children_mut()
                .iter_mut()
                .filter(|node| node.kind() == NodeKind::OperationDefinition)
                .collect(),
            false,
            |name, locations| Diagnostic::new(
                Self::ID,
                format!("There can only be one operation named \"{name}\"."),
            ).with_locations(locations),
        );
        PhaseResult::Continue(blueprint)
    }
}
