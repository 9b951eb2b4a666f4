use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Failed to parse the schema document: {message}")]
    Parse {
        message: String,
    },

    #[error(
        "The schema document is invalid:\n{}",
        messages.iter()
            .map(|msg| format!("  * {msg}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    Invalid {
        messages: Vec<String>,
    },
}
