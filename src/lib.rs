//! json-erd - Entity-relationship model inference from arbitrary JSON
//!
//! Provides a single inference pipeline:
//! - Parsing raw text into a JSON value
//! - Inferring tables and relationships from the value's shape
//!   (field flattening, child-entity discovery, foreign-key resolution)
//! - Exporting the result as the node/link lists a diagramming surface
//!   lays out
//! - Validating the inferred model's structural invariants

pub mod cli;
pub mod export;
pub mod inference;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use export::{ExportError, GraphExporter};
pub use inference::{ErdInferrer, InferenceConfig, InferenceError, InferenceStats};
pub use models::{ErdModel, Field, FieldValue, Relationship, Table};
pub use validation::{ModelValidationError, ModelValidationResult, ModelValidator};
