//! Field extraction: flattening an object's scalar structure

use serde_json::{Map, Value};

use crate::models::{Field, FieldValue};

/// Flatten a JSON mapping into an ordered field list.
///
/// Walks the entries in document order. Arrays whose first element is a
/// mapping are skipped entirely — they are child-entity candidates, not
/// field data. Nested mappings are flattened into the current list with
/// their key joined onto the prefix (`address` + `city` → `address_city`).
/// Everything else (scalars, null, arrays of scalars) becomes one field.
///
/// Primary marking: a key equal to "name" (case-insensitive) at any
/// depth, or the first entry of the table's own top level (empty prefix
/// only — flattened nested fields are never primary by position).
/// Foreign marking: a key containing "id" (case-insensitive), nested
/// levels only.
pub(crate) fn extract_fields(obj: &Map<String, Value>, prefix: &str) -> Vec<Field> {
    let mut fields = Vec::new();

    for (index, (key, value)) in obj.iter().enumerate() {
        match value {
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                // Child-entity candidate; handled by the discoverer.
                continue;
            }
            Value::Object(nested) => {
                let nested_prefix = format!("{}{}_", prefix, key);
                fields.extend(extract_fields(nested, &nested_prefix));
            }
            _ => {
                let value = match value {
                    // Scalar-led array: keep the scalar elements, in order.
                    Value::Array(items) => FieldValue::List(
                        items.iter().filter_map(FieldValue::from_scalar).collect(),
                    ),
                    scalar => FieldValue::from_scalar(scalar).unwrap_or(FieldValue::Null),
                };
                let is_primary =
                    key.eq_ignore_ascii_case("name") || (prefix.is_empty() && index == 0);
                let is_foreign = key.to_lowercase().contains("id") && !prefix.is_empty();
                fields.push(Field {
                    name: format!("{}{}", prefix, key),
                    value,
                    is_primary,
                    is_foreign,
                });
            }
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(value: serde_json::Value) -> Vec<Field> {
        let Value::Object(obj) = value else {
            panic!("test input must be an object");
        };
        extract_fields(&obj, "")
    }

    #[test]
    fn test_scalars_in_document_order() {
        let fields = extract(json!({"id": 7, "active": true, "note": null}));
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "active", "note"]);
        assert_eq!(fields[2].value, FieldValue::Null);
    }

    #[test]
    fn test_first_entry_is_primary_at_top_level_only() {
        let fields = extract(json!({"code": "A1", "address": {"city": "X"}}));
        assert!(fields[0].is_primary);
        // address_city is nested; never primary by position
        assert_eq!(fields[1].name, "address_city");
        assert!(!fields[1].is_primary);
    }

    #[test]
    fn test_name_key_is_primary_at_any_depth() {
        let fields = extract(json!({"owner": {"name": "Ada"}}));
        assert_eq!(fields[0].name, "owner_name");
        assert!(fields[0].is_primary);
    }

    #[test]
    fn test_id_keys_foreign_only_when_nested() {
        let fields = extract(json!({"id": 1, "meta": {"groupId": "g-1"}}));
        assert!(!fields[0].is_foreign);
        assert_eq!(fields[1].name, "meta_groupId");
        assert!(fields[1].is_foreign);
    }

    #[test]
    fn test_array_of_objects_is_skipped() {
        let fields = extract(json!({"rows": [{"a": 1}], "tag": "x"}));
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["tag"]);
    }

    #[test]
    fn test_array_of_scalars_is_one_field() {
        let fields = extract(json!({"tags": ["a", "b"]}));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "tags");
        assert_eq!(fields[0].value.to_string(), "a, b");
    }

    #[test]
    fn test_filtered_first_entry_yields_no_positional_primary() {
        // First entry is a child array; the positional heuristic must not
        // transfer to the next emitted field.
        let fields = extract(json!({"members": [{"a": 1}], "count": 2}));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "count");
        assert!(!fields[0].is_primary);
    }

    #[test]
    fn test_deep_flattening_concatenates_prefixes() {
        let fields = extract(json!({"a": {"b": {"c": 1}}}));
        assert_eq!(fields[0].name, "a_b_c");
    }
}
