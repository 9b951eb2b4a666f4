//! A phased GraphQL validation pipeline and an assertion harness for testing
//! the validation rules that run inside of it.
//!
//! Documents flow through a [`Pipeline`] as a [`Blueprint`]: a tree of
//! [`Node`]s where each node may carry [`Diagnostic`]s attached by the
//! [`Phase`] that produced them. The [`harness`] module runs a pipeline with
//! a set of rules under test and asserts on the diagnostics found in the
//! resulting tree.

pub mod ast;
mod attr_value;
pub mod blueprint;
mod diagnostic;
pub mod harness;
pub mod loc;
pub mod phase;
pub mod phases;
pub mod pipeline;
pub mod rules;
pub mod schema;

pub use attr_value::AttrValue;
pub use blueprint::Blueprint;
pub use blueprint::Node;
pub use blueprint::NodeKind;
pub use diagnostic::Diagnostic;
pub use phase::Phase;
pub use phase::PhaseId;
pub use pipeline::Pipeline;
pub use pipeline::PipelineOptions;
pub use pipeline::PipelineOutcome;
pub use schema::Schema;
