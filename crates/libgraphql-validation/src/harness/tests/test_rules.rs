//! Small rules that exist only to give the harness something predictable to
//! assert against.

use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;

/// Reports every field named `field` as unknown.
pub(super) struct UnknownFieldRule;
impl UnknownFieldRule {
    pub const ID: PhaseId = PhaseId::new("Test.UnknownFieldRule");
}
impl Phase for UnknownFieldRule {
    fn id(&self) -> PhaseId {
        Self::ID
    }

    fn run(&self, mut blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        blueprint.root_mut().prewalk_mut(&mut |node| {
            if node.kind() == NodeKind::Field && node.name() == Some("field") {
                let location = node.location();
                node.add_error(Diagnostic::at(Self::ID, "Unknown field", location));
            }
        });
        PhaseResult::Continue(blueprint)
    }
}

/// Reports every field, with a diagnostic that points at both line 1 and the
/// field's own line.
pub(super) struct TwoLocationRule;
impl TwoLocationRule {
    pub const ID: PhaseId = PhaseId::new("Test.TwoLocationRule");
}
impl Phase for TwoLocationRule {
    fn id(&self) -> PhaseId {
        Self::ID
    }

    fn run(&self, mut blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        blueprint.root_mut().prewalk_mut(&mut |node| {
            if node.kind() == NodeKind::Field
                && let Some(location) = node.location() {
                node.add_error(
                    Diagnostic::new(Self::ID, "Two locations")
                        .with_locations([
                            crate::loc::SourceLocation::new(1, 1),
                            location,
                        ]),
                );
            }
        });
        PhaseResult::Continue(blueprint)
    }
}
