//! Graph exporter
//!
//! Produces the graph-links document shape consumed by auto-layout
//! diagramming surfaces: a node entry per table (keyed by table key) and
//! a link entry per relationship.

use serde_json::json;

use crate::export::ExportError;
use crate::models::ErdModel;

/// Graph exporter for generating node/link JSON from an inferred model
pub struct GraphExporter;

impl GraphExporter {
    /// Create a new graph exporter instance
    pub fn new() -> Self {
        Self
    }

    /// Export a model as a compact graph-links JSON document.
    ///
    /// # Arguments
    ///
    /// * `model` - The inferred model to export
    ///
    /// # Returns
    ///
    /// A Result containing the JSON string, or an ExportError
    pub fn export(&self, model: &ErdModel) -> Result<String, ExportError> {
        serde_json::to_string(&self.graph_value(model))
            .map_err(|e| ExportError::SerializationError(format!("Failed to serialize graph: {}", e)))
    }

    /// Export a model as pretty-printed graph-links JSON.
    pub fn export_pretty(&self, model: &ErdModel) -> Result<String, ExportError> {
        serde_json::to_string_pretty(&self.graph_value(model))
            .map_err(|e| ExportError::SerializationError(format!("Failed to serialize graph: {}", e)))
    }

    /// Export a model to a file as pretty-printed graph-links JSON.
    pub fn export_to_file(
        &self,
        model: &ErdModel,
        path: &std::path::Path,
    ) -> Result<(), ExportError> {
        let json = self.export_pretty(model)?;
        std::fs::write(path, json)
            .map_err(|e| ExportError::IoError(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// The graph document as a JSON value: tables become the node array,
    /// relationships the link array, with the table key as the node key.
    fn graph_value(&self, model: &ErdModel) -> serde_json::Value {
        json!({
            "nodeDataArray": model.tables,
            "linkDataArray": model.relationships,
        })
    }
}

impl Default for GraphExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, FieldValue, Relationship, Table};

    fn sample() -> ErdModel {
        let mut name = Field::new("name", FieldValue::String("Acme".to_string()));
        name.is_primary = true;
        ErdModel {
            tables: vec![
                Table::new(1, "Company", vec![name]),
                Table::new(2, "staff_1", Vec::new()),
            ],
            relationships: vec![Relationship::members(1, 2)],
        }
    }

    #[test]
    fn test_export_shape() {
        let json = GraphExporter::new().export(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["nodeDataArray"][0]["key"], 1);
        assert_eq!(value["nodeDataArray"][0]["fields"][0]["isPrimary"], true);
        assert_eq!(value["linkDataArray"][0]["from"], 1);
        assert_eq!(value["linkDataArray"][0]["to"], 2);
        assert_eq!(value["linkDataArray"][0]["fromText"], "1");
        assert_eq!(value["linkDataArray"][0]["toText"], "N");
    }

    #[test]
    fn test_pretty_export_parses_back() {
        let json = GraphExporter::new().export_pretty(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodeDataArray"].as_array().unwrap().len(), 2);
    }
}
