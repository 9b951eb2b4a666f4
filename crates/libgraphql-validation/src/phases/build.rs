use crate::Blueprint;
use crate::Phase;
use crate::PhaseId;
use crate::blueprint::ExecutableNodeBuilder;
use crate::blueprint::ParsedInput;
use crate::blueprint::SchemaNodeBuilder;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;

/// Turns a parsed executable document into child nodes of the blueprint's
/// root.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildDocument;
impl BuildDocument {
    pub const ID: PhaseId = PhaseId::new("Document.Build");
}

#[inherent::inherent]
impl Phase for BuildDocument {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let nodes = match blueprint.input() {
            Some(ParsedInput::Executable(doc)) => ExecutableNodeBuilder::build(doc),
            _ => {
                log::warn!(
                    "The `{}` phase ran without a parsed executable document.",
                    Self::ID,
                );
                return PhaseResult::Continue(blueprint);
            },
        };
        blueprint.root_mut().children_mut().extend(nodes);
        PhaseResult::Continue(blueprint)
    }
}

/// Turns a parsed schema document into child nodes of the blueprint's root.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildSchema;
impl BuildSchema {
    pub const ID: PhaseId = PhaseId::new("Schema.Build");
}

#[inherent::inherent]
impl Phase for BuildSchema {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let nodes = match blueprint.input() {
            Some(ParsedInput::Schema(doc)) => SchemaNodeBuilder::build(doc),
            _ => {
                log::warn!(
                    "The `{}` phase ran without a parsed schema document.",
                    Self::ID,
                );
                return PhaseResult::Continue(blueprint);
            },
        };
        blueprint.root_mut().children_mut().extend(nodes);
        PhaseResult::Continue(blueprint)
    }
}
