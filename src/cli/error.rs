//! Error type for CLI commands

use thiserror::Error;

use crate::export::ExportError;
use crate::inference::InferenceError;

/// Error surfaced by a CLI command
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Inference(#[from] InferenceError),
    #[error("{0}")]
    Export(#[from] ExportError),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Model validation failed with {0} violation(s)")]
    Validation(usize),
}
