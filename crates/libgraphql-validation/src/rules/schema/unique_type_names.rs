use crate::Blueprint;
use crate::Diagnostic;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::rules;

/// Each named type may only be defined once. Extending a type with
/// `extend type` does not count as a second definition.
///
/// Every repeat is reported with the locations of all definitions of that
/// name.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueTypeNames;
impl UniqueTypeNames {
    pub const ID: PhaseId = PhaseId::new("Schema.Validation.UniqueTypeNames");
}

#[inherent::inherent]
impl Phase for UniqueTypeNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        rules::report_repeated_names(
            blueprint.root_mut()
                .children_mut()
                .iter_mut()
                .filter(|node| node.kind().is_type_definition())
                .collect(),
            true,
            |name, locations| Diagnostic::new(
                Self::ID,
                format!("There can be only one type named \"{name}\"."),
            ).with_locations(locations),
        );
        PhaseResult::Continue(blueprint)
    }
}
