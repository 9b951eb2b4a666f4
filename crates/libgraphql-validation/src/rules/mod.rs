//! Validation rules. Each rule is a [`Phase`] that attaches
//! [`Diagnostic`]s to the nodes it finds problems with and otherwise leaves
//! the blueprint untouched.

pub mod document;
pub mod schema;

use crate::Diagnostic;
use crate::Node;
use crate::Phase;
use crate::loc::SourceLocation;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Every rule that [`Pipeline::for_document`](crate::Pipeline::for_document)
/// runs, in the order it runs them.
pub fn document_rules() -> Vec<Arc<dyn Phase>> {
    vec![
        Arc::new(document::LoneAnonymousOperation),
        Arc::new(document::UniqueOperationNames),
        Arc::new(document::UniqueVariableNames),
        Arc::new(document::UniqueFragmentNames),
        Arc::new(document::KnownFragmentNames),
        Arc::new(document::NoUnusedFragments),
        Arc::new(document::FieldsOnCorrectType),
        Arc::new(document::UniqueArgumentNames),
    ]
}

/// Every rule that [`Pipeline::for_schema`](crate::Pipeline::for_schema)
/// runs, in the order it runs them.
pub fn schema_rules() -> Vec<Arc<dyn Phase>> {
    vec![
        Arc::new(schema::UniqueTypeNames),
        Arc::new(schema::UniqueFieldDefinitionNames),
        Arc::new(schema::KnownTypeNames),
    ]
}

/// Attaches a diagnostic to every node whose `name` repeats the name of an
/// earlier node in `nodes`. The first node with a given name is never
/// reported.
///
/// `make_error` receives the repeated name along with the locations the
/// diagnostic should point at: every node sharing the name when
/// `list_all_locations` is set, otherwise just the repeat itself.
pub(crate) fn report_repeated_names(
    nodes: Vec<&mut Node>,
    list_all_locations: bool,
    make_error: impl Fn(&str, Vec<SourceLocation>) -> Diagnostic,
) {
    let mut locations_by_name: HashMap<String, Vec<SourceLocation>> = HashMap::new();
    for node in &nodes {
        if let Some(name) = node.name() {
            locations_by_name.entry(name.to_string())
                .or_default()
                .extend(node.location());
        }
    }

    let mut seen = HashSet::new();
    for node in nodes {
        let Some(name) = node.name().map(str::to_string) else {
            continue;
        };
        if seen.insert(name.clone()) {
            continue;
        }

        let locations =
            if list_all_locations {
                locations_by_name.get(&name).cloned().unwrap_or_default()
            } else {
                node.location().into_iter().collect()
            };
        node.add_error(make_error(&name, locations));
    }
}

#[cfg(test)]
mod tests;
