use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::rules;

/// Fragment names must be unique within a document.
///
/// https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueFragmentNames;
impl UniqueFragmentNames {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.UniqueFragmentNames");
}

#[inherent::inherent]
impl Phase for UniqueFragmentNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        rules::report_repeated_names(
            blueprint.root_mut()
                .children_mut()
                .iter_mut()
                .filter(|node| node.kind() == NodeKind::Fragment)
                .collect(),
            false,
            |name, locations| Diagnostic::new(
                Self::ID,
                format!("There can only be one fragment named \"{name}\"."),
            ).with_locations(locations),
        );
        PhaseResult::Continue(blueprint)
    }
}
