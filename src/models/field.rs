//! Field model: one flattened attribute of an inferred table

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar (or list-of-scalars) value carried by a [`Field`].
///
/// Arrays whose elements are mappings never become field values; they are
/// child-entity candidates and are handled by the discoverer instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON null
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number (integer or float, kept verbatim)
    Number(serde_json::Number),
    /// JSON string
    String(String),
    /// Array of scalars, in source order
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Convert a scalar or array-of-scalars JSON value.
    ///
    /// Returns `None` for mappings and for arrays whose first element is a
    /// mapping — those shapes belong to the discoverer, not to fields.
    pub fn from_scalar(value: &serde_json::Value) -> Option<FieldValue> {
        use serde_json::Value;
        match value {
            Value::Null => Some(FieldValue::Null),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Number(n) => Some(FieldValue::Number(n.clone())),
            Value::String(s) => Some(FieldValue::String(s.clone())),
            Value::Array(items) => {
                let scalars: Option<Vec<FieldValue>> =
                    items.iter().map(FieldValue::from_scalar).collect();
                scalars.map(FieldValue::List)
            }
            Value::Object(_) => None,
        }
    }

    /// Whether this value is the JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::List(items) => {
                let joined: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", joined.join(", "))
            }
        }
    }
}

/// One attribute of an inferred [`Table`](super::Table).
///
/// Nested scalar structure is flattened into the field name with `_`
/// separators (`address_city`), so a field always holds scalar data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name; path-prefixed for flattened nested scalars
    pub name: String,
    /// The scalar value, or the ordered scalars of a source array
    pub value: FieldValue,
    /// Whether this field identifies the row
    #[serde(default)]
    pub is_primary: bool,
    /// Whether this field is inferred to reference another table
    #[serde(default)]
    pub is_foreign: bool,
}

impl Field {
    /// Create a plain field, neither primary nor foreign.
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
            is_primary: false,
            is_foreign: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_scalar_primitives() {
        assert_eq!(
            FieldValue::from_scalar(&json!("x")),
            Some(FieldValue::String("x".to_string()))
        );
        assert_eq!(
            FieldValue::from_scalar(&json!(true)),
            Some(FieldValue::Bool(true))
        );
        assert_eq!(FieldValue::from_scalar(&json!(null)), Some(FieldValue::Null));
    }

    #[test]
    fn test_from_scalar_rejects_mappings() {
        assert_eq!(FieldValue::from_scalar(&json!({"a": 1})), None);
        assert_eq!(FieldValue::from_scalar(&json!([{"a": 1}])), None);
    }

    #[test]
    fn test_scalar_array_becomes_list() {
        let value = FieldValue::from_scalar(&json!(["a", "b"])).unwrap();
        assert_eq!(value.to_string(), "a, b");
    }

    #[test]
    fn test_field_serializes_camel_case() {
        let mut field = Field::new("id", FieldValue::Number(1.into()));
        field.is_foreign = true;
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["isForeign"], true);
        assert_eq!(json["isPrimary"], false);
        assert_eq!(json["value"], 1);
    }
}
