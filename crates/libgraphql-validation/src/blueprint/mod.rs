#[allow(clippy::module_inception)]
mod blueprint;
mod executable_node_builder;
mod node;
mod node_kind;
mod schema_node_builder;
mod type_ref;

pub use blueprint::Blueprint;
pub use blueprint::ParsedInput;
pub use node::Node;
pub use node_kind::NodeKind;
pub(crate) use executable_node_builder::ExecutableNodeBuilder;
pub(crate) use schema_node_builder::SchemaNodeBuilder;
