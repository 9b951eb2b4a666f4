use crate::Blueprint;
use crate::Diagnostic;
use crate::Phase;
use crate::PhaseId;
use crate::blueprint::ParsedInput;
use crate::loc::SourceLocation;
use crate::phase::PhaseContext;
use crate::phase::PhaseResult;
use crate::phases::DocumentResult;

/// Parses the blueprint's source as an executable document.
///
/// A syntax error is attached to the root node and the pipeline jumps
/// straight to [`DocumentResult`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseDocument;
impl ParseDocument {
    pub const ID: PhaseId = PhaseId::new("Document.Parse");
}

#[inherent::inherent]
impl Phase for ParseDocument {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let parsed =
            graphql_parser::query::parse_query::<String>(blueprint.source())
                .map(|doc| doc.into_static())
                .map_err(|err| err.to_string());

        match parsed {
            Ok(doc) => {
                blueprint.set_input(ParsedInput::Executable(doc));
                PhaseResult::Continue(blueprint)
            },
            Err(message) => {
                blueprint.root_mut().add_error(syntax_error(Self::ID, &message));
                PhaseResult::Jump {
                    blueprint,
                    to: DocumentResult::ID,
                }
            },
        }
    }
}

/// Parses the blueprint's source as a schema (SDL) document.
///
/// A syntax error is attached to the root node and halts the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseSchema;
impl ParseSchema {
    pub const ID: PhaseId = PhaseId::new("Schema.Parse");
}

#[inherent::inherent]
impl Phase for ParseSchema {
    pub fn id(&self) -> PhaseId {
        Self::ID
    }

    pub fn run(&self, blueprint: Blueprint, _ctx: &PhaseContext<'_>) -> PhaseResult {
        let mut blueprint = blueprint;
        let parsed =
            graphql_parser::schema::parse_schema::<String>(blueprint.source())
                .map(|doc| doc.into_static())
                .map_err(|err| err.to_string());

        match parsed {
            Ok(doc) => {
                blueprint.set_input(ParsedInput::Schema(doc));
                PhaseResult::Continue(blueprint)
            },
            Err(message) => {
                blueprint.root_mut().add_error(syntax_error(Self::ID, &message));
                PhaseResult::Halt(blueprint)
            },
        }
    }
}

fn syntax_error(phase: PhaseId, message: &str) -> Diagnostic {
    Diagnostic::at(
        phase,
        message.trim(),
        SourceLocation::from_parse_error_message(message),
    )
}
