//! Relational model inference for JSON documents
//!
//! This module derives an entity-relationship model from an arbitrary,
//! schema-less JSON document: it flattens nested scalar structure into
//! per-table field lists, treats arrays of objects as child entities,
//! synthesizes parent/child containment edges, and resolves
//! foreign-key-shaped field names against discovered table names.
//!
//! ## Features
//!
//! - **Field extraction** - Flatten nested scalars into `address_city`
//!   style field names, in document order
//! - **Primary-key detection** - Name-keyed fields and top-level
//!   position, with a repair pass guaranteeing one primary per table
//! - **Child-entity discovery** - Arrays of objects become tables linked
//!   by "members" edges, bounded by a configurable depth cap
//! - **Foreign-key resolution** - `…Id` string fields matched against a
//!   case-insensitive table-name index
//!
//! ## Example
//!
//! ```rust,ignore
//! use json_erd::inference::ErdInferrer;
//!
//! let inferrer = ErdInferrer::new();
//! let model = inferrer.infer_json(r#"{"name": "Acme", "employees": [{"name": "Bob"}]}"#)?;
//! for table in &model.tables {
//!     println!("{} ({} fields)", table.name, table.fields.len());
//! }
//! ```

mod config;
mod engine;
mod error;
mod fields;
mod registry;

pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use engine::{ErdInferrer, InferenceStats};
pub use error::InferenceError;
pub use registry::TableNameRegistry;
