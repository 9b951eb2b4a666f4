use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;

/// An anonymous operation is only allowed when it is the only operation in
/// the document.
///
/// https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation
#[derive(Clone, Copy, Debug, Default)]
pub struct LoneAnonymousOperation;
impl LoneAnonymousOperation {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.LoneAnonymousOperation");
}

#[inherent::inherent]
impl Phase for LoneAnonymousOperation {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let num_operations =
            blueprint.definitions(NodeKind::OperationDefinition).count();
        if num_operations < 2 {
            return PhaseResult::Continue(blueprint);
        }

        for op in blueprint.root_mut().children_mut() {
            let is_anonymous =
                op.kind() == NodeKind::OperationDefinition
                    && op.name().is_none();
            if is_anonymous {
                let location = op.location();
                op.add_error(Diagnostic::at(
                    Self::ID,
                    "This anonymous operation must be the only defined operation.",
                    location,
                ));
            }
        }
        PhaseResult::Continue(blueprint)
    }
}
