use crate::AttrValue;
use crate::Diagnostic;
use crate::NodeKind;
use crate::loc::SourceLocation;
use indexmap::IndexMap;
use serde::Serialize;

/// A single element of a [`Blueprint`](crate::Blueprint) tree.
///
/// Every node has a [`NodeKind`], an ordered set of named attributes (e.g.
/// `name`, `type_condition`), an optional source location, the diagnostics
/// that pipeline phases have attached to it, and its child nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    kind: NodeKind,
    attrs: IndexMap<String, AttrValue>,
    location: Option<SourceLocation>,
    errors: Vec<Diagnostic>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: IndexMap::new(),
            location: None,
            errors: vec![],
            children: vec![],
        }
    }

    pub fn with_attr(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_error(mut self, error: Diagnostic) -> Self {
        self.errors.push(error);
        self
    }

    pub fn with_location(mut self, location: impl Into<SourceLocation>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn add_error(&mut self, error: Diagnostic) {
        self.errors.push(error);
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn attrs(&self) -> &IndexMap<String, AttrValue> {
        &self.attrs
    }

    pub fn children(&self) -> &[Node] {
        self.children.as_slice()
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn errors(&self) -> &[Diagnostic] {
        self.errors.as_slice()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// Shorthand for the `name` attribute, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.attr("name").and_then(AttrValue::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Number of diagnostics attached to this node and all of its
    /// descendants.
    pub fn error_count(&self) -> usize {
        self.errors.len()
            + self.children.iter().map(Node::error_count).sum::<usize>()
    }

    /// Visits this node and then each of its descendants, depth-first.
    pub fn prewalk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.prewalk(visit);
        }
    }

    /// Same as [`Node::prewalk`], but with mutable access to each node.
    ///
    /// `visit` runs on a node before the walk descends into that node's
    /// children, so children added or removed by `visit` are reflected in the
    /// remainder of the walk.
    pub fn prewalk_mut(&mut self, visit: &mut impl FnMut(&mut Node)) {
        visit(self);
        for child in &mut self.children {
            child.prewalk_mut(visit);
        }
    }
}
