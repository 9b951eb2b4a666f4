//! Assertions for testing validation rules.
//!
//! Each assertion runs a document through a pipeline made up of the
//! pre-validation phases (parsing, building, etc.) followed by only the
//! rules under test, then inspects the diagnostics that ended up on the
//! resulting [`Blueprint`](crate::Blueprint):
//!
//! ```ignore
//! use libgraphql_validation::NodeKind;
//! use libgraphql_validation::harness;
//! use libgraphql_validation::harness::Check;
//! use libgraphql_validation::rules::document::UniqueOperationNames;
//!
//! harness::assert_fails_rule(
//!     UniqueOperationNames,
//!     "query Foo { dog { name } }\nquery Foo { cat { name } }",
//!     Default::default(),
//!     vec![harness::bad_value(
//!         UniqueOperationNames::ID,
//!         NodeKind::OperationDefinition,
//!         "There can only be one operation named \"Foo\".",
//!         2,
//!         Check::None,
//!     )],
//! );
//! ```

mod assertions;
mod check;
mod diagnostic_pair;
mod expectation;
mod expectation_failure;
pub mod fixtures;
mod flatten;
mod line;
mod runner;

pub use assertions::assert_fails_rule;
pub use assertions::assert_fails_rule_with_schema;
pub use assertions::assert_fails_schema_rule;
pub use assertions::assert_invalid;
pub use assertions::assert_passes_rule;
pub use assertions::assert_passes_rule_with_schema;
pub use assertions::assert_passes_schema_rule;
pub use assertions::assert_valid;
pub use assertions::check_no_errors;
pub use check::Check;
pub use diagnostic_pair::DiagnosticPair;
pub use expectation::Expectation;
pub use expectation::bad_value;
pub use expectation_failure::ExpectationFailure;
pub use flatten::flatten;
pub use line::Line;
pub use runner::ValidationMode;
pub use runner::pre_validation_pipeline;
pub use runner::run;

#[cfg(test)]
mod tests;
