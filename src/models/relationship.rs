//! Relationship model: a directed, labeled edge between two tables

use serde::{Deserialize, Serialize};

/// Default cardinality label for the source end of an edge.
pub const DEFAULT_FROM_TEXT: &str = "1";
/// Default cardinality label for the target end of an edge.
pub const DEFAULT_TO_TEXT: &str = "N";

/// A directed edge between two inferred tables.
///
/// Relationships are produced in exactly two situations: discovering a
/// child entity inside a parent (a containment edge labeled "members"),
/// and resolving a foreign-key-shaped field name against a known table
/// name (a reference edge labeled "refers to …"). Self-loops are never
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Key of the source table (always already discovered)
    pub from: u32,
    /// Key of the target table
    pub to: u32,
    /// Label describing the relationship's nature
    pub text: String,
    /// Cardinality label on the source end
    #[serde(default = "default_from_text")]
    pub from_text: String,
    /// Cardinality label on the target end
    #[serde(default = "default_to_text")]
    pub to_text: String,
}

fn default_from_text() -> String {
    DEFAULT_FROM_TEXT.to_string()
}

fn default_to_text() -> String {
    DEFAULT_TO_TEXT.to_string()
}

impl Relationship {
    /// One-to-many containment edge from a parent table to a child entity
    /// discovered inside it.
    pub fn members(parent: u32, child: u32) -> Self {
        Self {
            from: parent,
            to: child,
            text: "members".to_string(),
            from_text: "1".to_string(),
            to_text: "N".to_string(),
        }
    }

    /// One-to-one reference edge produced by foreign-key name resolution.
    ///
    /// `candidate` is the table-name fragment recovered from the field
    /// name (the key with its trailing `Id` suffix stripped).
    pub fn refers_to(from: u32, to: u32, candidate: &str) -> Self {
        Self {
            from,
            to,
            text: format!("refers to {}", candidate),
            from_text: "1".to_string(),
            to_text: "1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_edge_labels() {
        let rel = Relationship::members(1, 2);
        assert_eq!(rel.from, 1);
        assert_eq!(rel.to, 2);
        assert_eq!(rel.text, "members");
        assert_eq!(rel.from_text, "1");
        assert_eq!(rel.to_text, "N");
    }

    #[test]
    fn test_refers_to_edge_labels() {
        let rel = Relationship::refers_to(3, 2, "department");
        assert_eq!(rel.text, "refers to department");
        assert_eq!(rel.from_text, "1");
        assert_eq!(rel.to_text, "1");
    }

    #[test]
    fn test_cardinality_defaults_on_deserialize() {
        let rel: Relationship =
            serde_json::from_str(r#"{"from": 1, "to": 2, "text": "members"}"#).unwrap();
        assert_eq!(rel.from_text, "1");
        assert_eq!(rel.to_text, "N");
    }
}
