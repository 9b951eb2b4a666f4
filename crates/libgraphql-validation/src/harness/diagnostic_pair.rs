use crate::Diagnostic;
use crate::Node;

/// A diagnostic along with the node it is attached to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagnosticPair<'a> {
    pub node: &'a Node,
    pub diagnostic: &'a Diagnostic,
}
