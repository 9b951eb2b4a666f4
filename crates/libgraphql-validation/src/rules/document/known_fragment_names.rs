use crate::Blueprint;
use crate::Diagnostic;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use std::collections::HashSet;

/// Every fragment spread must refer to a fragment defined in the document.
///
/// https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownFragmentNames;
impl KnownFragmentNames {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.KnownFragmentNames");
}

#[inherent::inherent]
impl Phase for KnownFragmentNames {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let known_fragments: HashSet<String> =
            blueprint.definitions(NodeKind::Fragment)
                .filter_map(|frag| frag.name().map(str::to_string))
                .collect();

        blueprint.root_mut().prewalk_mut(&mut |node| {
            if node.kind() != NodeKind::FragmentSpread {
                return;
            }
            let error = match node.name() {
                Some(name) if !known_fragments.contains(name) => Diagnostic::at(
                    Self::ID,
                    format!("Unknown fragment \"{name}\"."),
                    node.location(),
                ),
                _ => return,
            };
            node.add_error(error);
        });
        PhaseResult::Continue(blueprint)
    }
}
