use thiserror::Error;

/// Why an assertion over a pipeline's diagnostics did not hold.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExpectationFailure {
    #[error("Could not find error:\n{banner}\n\nFound these errors:\n{}", bulleted(found))]
    NotFound {
        banner: String,
        found: Vec<String>,
    },

    #[error("No errors found, but expected:\n{banner}")]
    NoErrorsFound {
        banner: String,
    },

    #[error("Expected no errors, but found these:\n{}", bulleted(found))]
    UnexpectedErrors {
        found: Vec<String>,
    },
}

fn bulleted(messages: &[String]) -> String {
    messages.iter()
        .map(|msg| format!("  * {msg}"))
        .collect::<Vec<_>>()
        .join("\n")
}
