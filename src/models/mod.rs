//! Models module
//!
//! Defines the relational model produced by inference: flattened fields,
//! tables keyed in discovery order, and directed labeled relationships.

pub mod erd;
pub mod field;
pub mod relationship;
pub mod table;

pub use erd::{ErdModel, ROOT_TABLE_KEY};
pub use field::{Field, FieldValue};
pub use relationship::{Relationship, DEFAULT_FROM_TEXT, DEFAULT_TO_TEXT};
pub use table::Table;
