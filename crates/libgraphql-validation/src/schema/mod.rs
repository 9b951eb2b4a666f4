mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
mod schema_error;

pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_error::SchemaError;
