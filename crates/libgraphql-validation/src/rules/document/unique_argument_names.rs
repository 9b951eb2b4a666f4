use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::rules;

/// A field or directive may not be passed the same argument twice.
///
/// https://spec.graphql.org/October2021/#sec-Argument-Uniqueness
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueArgumentNames;
impl UniqueArgumentNames {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.UniqueArgumentNames");
}

#[inherent::inherent]
impl Phase for UniqueArgumentNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        blueprint.root_mut().prewalk_mut(&mut |node| {
            if !matches!(node.kind(), NodeKind::Directive | NodeKind::Field) {
                return;
            }
            rules::report_repeated_names(
                node.children_mut()
                    .iter_mut()
                    .filter(|child| child.kind() == NodeKind::Argument)
                    .collect(),
                false,
                |name, locations| Diagnostic::new(
                    Self::ID,
                    format!("Duplicate argument name \"{name}\"."),
                ).with_locations(locations),
            );
        });
        PhaseResult::Continue(blueprint)
    }
}
