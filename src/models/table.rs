//! Table model: one inferred entity

use serde::{Deserialize, Serialize};

use super::field::Field;

/// One inferred entity with a flattened field list.
///
/// Keys are positive integers assigned in discovery order; the root table
/// of a run is always key 1. Tables are built once during the tree walk
/// and never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use json_erd::models::{Field, FieldValue, Table};
///
/// let table = Table::new(1, "Company", vec![
///     Field::new("name", FieldValue::String("Acme".to_string())),
/// ]);
/// assert_eq!(table.key, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Unique key within one run (root = 1)
    pub key: u32,
    /// Display label
    pub name: String,
    /// Flattened fields, in extraction order
    pub fields: Vec<Field>,
}

impl Table {
    /// Create a table from already-extracted fields.
    pub fn new(key: u32, name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            key,
            name: name.into(),
            fields,
        }
    }

    /// The designated primary field, if any.
    ///
    /// Invariant: exactly one once `fields` is non-empty; a table with no
    /// fields has none.
    pub fn primary_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_primary)
    }

    /// Look up a field by its flattened name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
