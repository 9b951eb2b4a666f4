use crate::Blueprint;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;

/// Marks the operation that would be executed with a `current = true`
/// attribute.
///
/// That is the operation named by
/// [`PipelineOptions::operation_name`](crate::PipelineOptions::operation_name),
/// or the only operation in the document when no name was requested. Every
/// other operation is marked `current = false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentOperation;
impl CurrentOperation {
    pub const ID: PhaseId = PhaseId::new("Document.CurrentOperation");
}

#[inherent::inherent]
impl Phase for CurrentOperation {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let num_operations =
            blueprint.definitions(NodeKind::OperationDefinition).count();
        let requested_name = ctx.options.operation_name.as_deref();

        for op in blueprint.root_mut().children_mut() {
            if op.kind() != NodeKind::OperationDefinition {
                continue;
            }
            let is_current = match requested_name {
                Some(requested_name) => op.name() == Some(requested_name),
                None => num_operations == 1,
            };
            op.set_attr("current", is_current);
        }

        PhaseResult::Continue(blueprint)
    }
}
