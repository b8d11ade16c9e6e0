//! Error types for model inference

use thiserror::Error;

/// Errors that can occur while inferring a relational model.
///
/// Both variants are terminal for the run: no partial table or
/// relationship collections are produced on failure.
#[derive(Error, Debug, Clone)]
pub enum InferenceError {
    /// The input text is not well-formed JSON
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Valid JSON, but the top-level value is not an object
    #[error("Invalid JSON structure: expected object at root, found {0}")]
    InvalidStructure(String),

    /// Structurally valid input that yields nothing worth diagramming
    #[error("No valid tables could be extracted from the JSON")]
    NoValidTables,
}

impl From<serde_json::Error> for InferenceError {
    fn from(e: serde_json::Error) -> Self {
        InferenceError::JsonParse(e.to_string())
    }
}
