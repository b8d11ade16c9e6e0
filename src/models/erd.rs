//! The complete inferred entity-relationship model

use serde::{Deserialize, Serialize};

use super::relationship::Relationship;
use super::table::Table;

/// Key of the root table in every run.
pub const ROOT_TABLE_KEY: u32 = 1;

/// The complete result of one inference run: ordered tables and ordered
/// relationships, handed to a diagramming surface as a value.
///
/// Both collections are in discovery order and are never mutated after
/// the run completes; re-running replaces the whole model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErdModel {
    /// Inferred entities, root first
    pub tables: Vec<Table>,
    /// Containment and reference edges
    pub relationships: Vec<Relationship>,
}

impl ErdModel {
    /// Look up a table by key.
    pub fn table(&self, key: u32) -> Option<&Table> {
        self.tables.iter().find(|t| t.key == key)
    }

    /// The root table (key 1).
    pub fn root(&self) -> Option<&Table> {
        self.table(ROOT_TABLE_KEY)
    }

    /// Incoming relationships of a table.
    pub fn relationships_to(&self, key: u32) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter().filter(move |r| r.to == key)
    }

    /// Outgoing relationships of a table.
    pub fn relationships_from(&self, key: u32) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter().filter(move |r| r.from == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ErdModel {
        ErdModel {
            tables: vec![
                Table::new(1, "Company", Vec::new()),
                Table::new(2, "staff_1", Vec::new()),
            ],
            relationships: vec![Relationship::members(1, 2)],
        }
    }

    #[test]
    fn test_table_lookup() {
        let model = sample();
        assert_eq!(model.root().unwrap().name, "Company");
        assert_eq!(model.table(2).unwrap().name, "staff_1");
        assert!(model.table(9).is_none());
    }

    #[test]
    fn test_relationship_filters() {
        let model = sample();
        assert_eq!(model.relationships_from(1).count(), 1);
        assert_eq!(model.relationships_to(2).count(), 1);
        assert_eq!(model.relationships_to(1).count(), 0);
    }
}
