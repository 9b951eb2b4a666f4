//! The non-rule phases that make up the document and schema pipelines.

mod build;
mod current_operation;
mod document_result;
mod parse;
mod validation_result;

pub use build::BuildDocument;
pub use build::BuildSchema;
pub use current_operation::CurrentOperation;
pub use document_result::DocumentResult;
pub use parse::ParseDocument;
pub use parse::ParseSchema;
pub use validation_result::ValidationResult;

#[cfg(test)]
mod tests;
