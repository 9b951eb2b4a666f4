use crate::Blueprint;
use crate::Diagnostic;
use crate::Node;
use crate::NodeKind;
use crate::Phase;
use crate::PhaseId;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use std::collections::HashMap;
use std::collections::HashSet;

/// Every fragment defined in a document must be reachable, directly or
/// through other fragments, from at least one operation.
///
/// https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used
#[derive(Clone, Copy, Debug, Default)]
pub struct NoUnusedFragments;
impl NoUnusedFragments {
    pub const ID: PhaseId = PhaseId::new("Document.Validation.NoUnusedFragments");
}

#[inherent::inherent]
impl Phase for NoUnusedFragments {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;

        let mut pending = vec![];
        let mut spreads_by_fragment: HashMap<String, Vec<String>> = HashMap::new();
        for def in blueprint.root().children() {
            match def.kind() {
                NodeKind::OperationDefinition => pending.extend(spread_names(def)),
                NodeKind::Fragment => if let Some(name) = def.name() {
                    spreads_by_fragment.entry(name.to_string())
                        .or_default()
                        .extend(spread_names(def));
                },
                _ => (),
            }
        }

        let mut used = HashSet::new();
        while let Some(name) = pending.pop() {
            if used.insert(name.clone())
                && let Some(next) = spreads_by_fragment.get(&name) {
                pending.extend(next.iter().cloned());
            }
        }

        for frag in blueprint.root_mut().children_mut() {
            if frag.kind() != NodeKind::Fragment {
                continue;
            }
            let error = match frag.name() {
                Some(name) if !used.contains(name) => Diagnostic::at(
                    Self::ID,
                    format!("Fragment \"{name}\" is never used."),
                    frag.location(),
                ),
                _ => continue,
            };
            frag.add_error(error);
        }
        PhaseResult::Continue(blueprint)
    }
}

/// Names of every fragment spread anywhere under `node`.
fn spread_names(node: &Node) -> Vec<String> {
    let mut names = vec![];
    node.prewalk(&mut |n| {
        if n.kind() == NodeKind::FragmentSpread
            && let Some(name) = n.name() {
            names.push(name.to_string());
        }
    });
    names
}
