//! Relational model inference engine

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{ErdModel, Relationship, Table, ROOT_TABLE_KEY};

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::fields::extract_fields;
use super::registry::TableNameRegistry;

/// Trailing "Id" suffix of foreign-key-shaped field names.
static ID_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)id$").expect("valid literal pattern"));

/// Statistics from one inference run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Tables discovered, root included
    pub tables_discovered: usize,
    /// Containment and reference edges produced
    pub relationships_discovered: usize,
    /// Fields across all tables
    pub fields_discovered: usize,
    /// Deepest traversal level reached
    pub max_depth_seen: usize,
}

/// Accumulator state threaded through the recursive descent.
///
/// Carrying the collections explicitly (rather than closing over outer
/// mutable state) keeps each subtree's traversal testable in isolation.
struct Discovery {
    tables: Vec<Table>,
    relationships: Vec<Relationship>,
    registry: TableNameRegistry,
    max_depth_seen: usize,
}

impl Discovery {
    fn new() -> Self {
        Self {
            tables: Vec::new(),
            relationships: Vec::new(),
            registry: TableNameRegistry::new(),
            max_depth_seen: 0,
        }
    }

    /// Next free table key. Keys are dense and discovery-ordered.
    fn next_key(&self) -> u32 {
        self.tables.len() as u32 + 1
    }
}

/// Model inference engine
///
/// Walks a parsed JSON document and derives an [`ErdModel`]: one table
/// per entity-like region (the root object plus every element of every
/// array-of-objects), a "members" edge per parent/child pair, and a
/// "refers to" edge per foreign-key-shaped field that matches a known
/// table name. Each run is a full, stateless re-derivation.
///
/// # Example
///
/// ```rust
/// use json_erd::inference::ErdInferrer;
///
/// let inferrer = ErdInferrer::new();
/// let model = inferrer
///     .infer_json(r#"{"name": "Acme", "employees": [{"name": "Bob"}]}"#)?;
/// assert_eq!(model.tables.len(), 2);
/// # Ok::<(), json_erd::inference::InferenceError>(())
/// ```
pub struct ErdInferrer {
    config: InferenceConfig,
}

impl ErdInferrer {
    /// Create an inference engine with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create an inference engine with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Parse raw text as JSON and infer a model from it.
    ///
    /// The parse error of malformed input is surfaced verbatim; no
    /// partial model is ever produced.
    pub fn infer_json(&self, text: &str) -> Result<ErdModel, InferenceError> {
        let value: Value = serde_json::from_str(text)?;
        self.infer_value(&value)
    }

    /// Infer a model from an already-parsed JSON value.
    pub fn infer_value(&self, value: &Value) -> Result<ErdModel, InferenceError> {
        self.infer_value_with_stats(value).map(|(model, _)| model)
    }

    /// Infer a model and report traversal statistics alongside it.
    pub fn infer_value_with_stats(
        &self,
        value: &Value,
    ) -> Result<(ErdModel, InferenceStats), InferenceError> {
        let Value::Object(root) = value else {
            return Err(InferenceError::InvalidStructure(
                value_type_name(value).to_string(),
            ));
        };

        let mut discovery = Discovery::new();
        let root_table = build_table(
            root,
            &self.config.root_label,
            ROOT_TABLE_KEY,
            &mut discovery.registry,
        );
        discovery.tables.push(root_table);

        self.discover(root, ROOT_TABLE_KEY, &self.config.root_label, 0, &mut discovery);

        // A run in which not a single table carries a field has nothing
        // worth diagramming; report it instead of returning empty tables.
        if discovery.tables.iter().all(|t| t.fields.is_empty()) {
            return Err(InferenceError::NoValidTables);
        }

        let stats = InferenceStats {
            tables_discovered: discovery.tables.len(),
            relationships_discovered: discovery.relationships.len(),
            fields_discovered: discovery.tables.iter().map(|t| t.fields.len()).sum(),
            max_depth_seen: discovery.max_depth_seen,
        };
        let model = ErdModel {
            tables: discovery.tables,
            relationships: discovery.relationships,
        };
        Ok((model, stats))
    }

    /// Walk one object's entries, collecting child entities and
    /// reference edges under the given parent table.
    fn discover(
        &self,
        obj: &Map<String, Value>,
        parent_key: u32,
        parent_name: &str,
        depth: usize,
        discovery: &mut Discovery,
    ) {
        if depth > self.config.max_depth {
            debug!(
                parent = parent_name,
                depth, "discovery depth cap reached, not descending"
            );
            return;
        }
        discovery.max_depth_seen = discovery.max_depth_seen.max(depth);

        for (key, value) in obj {
            match value {
                // One-to-many child collection: every element becomes its
                // own table plus a containment edge from the parent.
                Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                    for (ordinal, item) in items.iter().enumerate() {
                        let child_key = discovery.next_key();
                        let child_name = element_name(item)
                            .unwrap_or_else(|| format!("{}_{}", key, ordinal + 1));

                        let child = match item {
                            Value::Object(element) => {
                                build_table(element, &child_name, child_key, &mut discovery.registry)
                            }
                            // Mixed array: non-mapping elements still take
                            // a key so sibling ordinals stay stable.
                            _ => {
                                discovery.registry.register(child_key, &child_name);
                                Table::new(child_key, child_name.clone(), Vec::new())
                            }
                        };
                        debug!(
                            parent = parent_name,
                            child = child.name.as_str(),
                            key = child_key,
                            "discovered child entity"
                        );
                        discovery.tables.push(child);
                        discovery
                            .relationships
                            .push(Relationship::members(parent_key, child_key));

                        if let Value::Object(element) = item {
                            self.discover(element, child_key, &child_name, depth + 1, discovery);
                        }
                    }
                }
                // Nested plain object: same parent, new resolution context.
                Value::Object(nested) => {
                    self.discover(nested, parent_key, parent_name, depth + 1, discovery);
                }
                // Foreign-key-shaped string field.
                Value::String(_) if key.to_lowercase().contains("id") => {
                    let candidate = ID_SUFFIX.replace(key, "");
                    if let Some(target) = discovery.registry.resolve(&candidate) {
                        if target != parent_key {
                            debug!(
                                from = parent_name,
                                candidate = candidate.as_ref(),
                                to = target,
                                "resolved foreign-key reference"
                            );
                            discovery
                                .relationships
                                .push(Relationship::refers_to(parent_key, target, &candidate));
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

impl Default for ErdInferrer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one table from a JSON object: extract fields, then enforce the
/// single-primary invariant, then register the name for foreign-key
/// resolution.
///
/// Extraction alone is unreliable: the positional heuristic misses when
/// the first entry was filtered out (a nested object or child array), and
/// the name-key heuristic can fire more than once. The repair pass after
/// the full field list is known settles both.
fn build_table(
    obj: &Map<String, Value>,
    name: &str,
    key: u32,
    registry: &mut TableNameRegistry,
) -> Table {
    let mut fields = extract_fields(obj, "");

    let marked = fields.iter().filter(|f| f.is_primary).count();
    if marked == 0 {
        if let Some(by_name) = fields
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case("name"))
        {
            by_name.is_primary = true;
        } else if let Some(first) = fields.first_mut() {
            first.is_primary = true;
        }
    } else if marked > 1 {
        // The name-keyed field outranks the positional mark, matching the
        // promotion order of the repair pass above.
        let keep = fields
            .iter()
            .position(|f| f.is_primary && f.name.eq_ignore_ascii_case("name"))
            .or_else(|| fields.iter().position(|f| f.is_primary));
        for (index, field) in fields.iter_mut().enumerate() {
            field.is_primary = Some(index) == keep;
        }
    }

    registry.register(key, name);
    Table::new(key, name, fields)
}

/// A child entity's own label: its "name" field, when that field holds a
/// non-empty string.
fn element_name(item: &Value) -> Option<String> {
    item.get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_table_is_key_one_with_configured_label() {
        let inferrer = ErdInferrer::with_config(
            InferenceConfig::builder().root_label("Document").build(),
        );
        let model = inferrer.infer_json(r#"{"id": 1}"#).unwrap();
        assert_eq!(model.tables.len(), 1);
        assert_eq!(model.root().unwrap().name, "Document");
    }

    #[test]
    fn test_child_tables_and_members_edges() {
        let inferrer = ErdInferrer::new();
        let model = inferrer
            .infer_value(&json!({
                "id": 1,
                "name": "Acme",
                "employees": [{"name": "Bob"}, {"name": "Sue"}]
            }))
            .unwrap();

        assert_eq!(model.tables.len(), 3);
        assert_eq!(model.table(2).unwrap().name, "Bob");
        assert_eq!(model.table(3).unwrap().name, "Sue");
        assert_eq!(
            model.relationships,
            vec![Relationship::members(1, 2), Relationship::members(1, 3)]
        );
    }

    #[test]
    fn test_unnamed_elements_get_ordinal_labels() {
        let inferrer = ErdInferrer::new();
        let model = inferrer
            .infer_value(&json!({"items": [{"sku": "a"}, {"sku": "b"}]}))
            .unwrap();

        assert_eq!(model.table(2).unwrap().name, "items_1");
        assert_eq!(model.table(3).unwrap().name, "items_2");
    }

    #[test]
    fn test_nested_object_keeps_parent_context() {
        // The nested object flattens into the root's fields and creates
        // no table of its own.
        let inferrer = ErdInferrer::new();
        let model = inferrer
            .infer_value(&json!({"address": {"city": "X", "zip": "1"}}))
            .unwrap();

        assert_eq!(model.tables.len(), 1);
        let root = model.root().unwrap();
        assert!(root.field("address_city").is_some());
        assert!(root.field("address_zip").is_some());
    }

    #[test]
    fn test_foreign_key_resolution_skips_self() {
        let inferrer = ErdInferrer::new();
        // companyId inside a child of Company: candidate "company"
        // resolves to the root, which differs from the child itself.
        let model = inferrer
            .infer_value(&json!({
                "name": "Acme",
                "staff": [{"name": "Bob", "companyId": "c-1"}]
            }))
            .unwrap();

        let refs: Vec<&Relationship> = model
            .relationships
            .iter()
            .filter(|r| r.text.starts_with("refers to"))
            .collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].from, 2);
        assert_eq!(refs[0].to, 1);
        assert_eq!(refs[0].text, "refers to company");
    }

    #[test]
    fn test_bare_id_key_produces_no_reference() {
        let inferrer = ErdInferrer::new();
        let model = inferrer
            .infer_value(&json!({
                "name": "Acme",
                "staff": [{"name": "Bob", "id": "s-1"}]
            }))
            .unwrap();

        assert!(model.relationships.iter().all(|r| r.text == "members"));
    }

    #[test]
    fn test_single_primary_when_both_heuristics_fire() {
        let inferrer = ErdInferrer::new();
        let model = inferrer
            .infer_value(&json!({"id": 1, "name": "Acme"}))
            .unwrap();

        let root = model.root().unwrap();
        let primaries: Vec<&str> = root
            .fields
            .iter()
            .filter(|f| f.is_primary)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(primaries, vec!["name"]);
    }

    #[test]
    fn test_first_remaining_field_promoted_when_first_entry_filtered() {
        // The child's first entry is itself a child array and it has no
        // "name" field anywhere; the first surviving field wins.
        let inferrer = ErdInferrer::new();
        let model = inferrer
            .infer_value(&json!({
                "name": "Acme",
                "teams": [{
                    "members": [{"role": "dev"}],
                    "size": 3
                }]
            }))
            .unwrap();

        let team = model.table(2).unwrap();
        assert_eq!(team.primary_field().unwrap().name, "size");
    }

    #[test]
    fn test_stats_reflect_discovery() {
        let inferrer = ErdInferrer::new();
        let (_, stats) = inferrer
            .infer_value_with_stats(&json!({
                "name": "Acme",
                "staff": [{"name": "Bob"}]
            }))
            .unwrap();

        assert_eq!(stats.tables_discovered, 2);
        assert_eq!(stats.relationships_discovered, 1);
        assert_eq!(stats.fields_discovered, 2);
        assert_eq!(stats.max_depth_seen, 1);
    }
}
