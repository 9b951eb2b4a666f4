use crate::Node;
use crate::harness::DiagnosticPair;

/// Collects every diagnostic in the tree rooted at `node`, each paired with
/// the node it is attached to.
///
/// Pairs are ordered by a pre-order walk of the tree: a node's own
/// diagnostics (in the order they were attached) come before those of its
/// descendants. Nodes without diagnostics contribute nothing but are still
/// descended into.
pub fn flatten(node: &Node) -> Vec<DiagnosticPair<'_>> {
    node.errors()
        .iter()
        .map(|diagnostic| DiagnosticPair { node, diagnostic })
        .chain(node.children().iter().flat_map(flatten))
        .collect()
}
