//! Export functionality
//!
//! Serializes an inferred model into the node/link collections a
//! diagramming surface consumes.

pub mod graph;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

pub use graph::GraphExporter;
