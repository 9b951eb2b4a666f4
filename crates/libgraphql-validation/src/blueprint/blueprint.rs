use crate::Node;
use crate::NodeKind;
use crate::ast;

/// The parsed form of a blueprint's source text, once a parse phase has run.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedInput {
    Executable(ast::query::Document),
    Schema(ast::schema::Document),
}

/// The unit of work that flows through a [`Pipeline`](crate::Pipeline).
///
/// A blueprint starts out as nothing but source text and an empty
/// [`NodeKind::Document`] root. A parse phase fills in [`ParsedInput`], a
/// build phase turns that into child nodes under the root, and validation
/// phases then attach [`Diagnostic`](crate::Diagnostic)s to those nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Blueprint {
    source: String,
    input: Option<ParsedInput>,
    root: Node,
}

impl Blueprint {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            input: None,
            root: Node::new(NodeKind::Document),
        }
    }

    /// All nodes directly under the root with the given kind.
    pub fn definitions(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.root.children()
            .iter()
            .filter(move |node| node.kind() == kind)
    }

    pub fn error_count(&self) -> usize {
        self.root.error_count()
    }

    pub fn input(&self) -> Option<&ParsedInput> {
        self.input.as_ref()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub(crate) fn set_input(&mut self, input: ParsedInput) {
        self.input = Some(input);
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }
}
