//! Model validation functionality
//!
//! Checks an inferred model against its structural invariants: key
//! uniqueness, the single-primary rule, self-loop suppression, and the
//! one-containment-edge-per-child property. Reference cycles between
//! tables are detected with graph reachability and reported separately —
//! cyclic "refers to" chains are legal output, but a layout surface may
//! want to know about them.

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Directed;
use std::collections::HashMap;

use crate::models::{ErdModel, ROOT_TABLE_KEY};

/// One violated invariant in an inferred model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelValidationError {
    #[error("Duplicate table key {0}")]
    DuplicateKey(u32),
    #[error("Root table key is {0}, expected {expected}", expected = ROOT_TABLE_KEY)]
    BadRootKey(u32),
    #[error("Table {0} has fields but no primary field")]
    MissingPrimary(u32),
    #[error("Table {0} has {1} primary fields")]
    MultiplePrimaries(u32, usize),
    #[error("Relationship from table {0} to itself")]
    SelfLoop(u32),
    #[error("Relationship endpoint {0} does not name a table")]
    DanglingEndpoint(u32),
    #[error("Table {0} has {1} incoming containment edges, expected exactly 1")]
    BadContainment(u32, usize),
}

/// Result of validating an inferred model
#[derive(Debug, Default)]
pub struct ModelValidationResult {
    /// Invariant violations, in detection order
    pub violations: Vec<ModelValidationError>,
    /// Cycles among "refers to" edges, each as a key path
    pub reference_cycles: Vec<Vec<u32>>,
}

impl ModelValidationResult {
    /// Whether the model satisfies every invariant.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Model validator
pub struct ModelValidator;

impl ModelValidator {
    /// Create a new model validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a model against the structural invariants.
    pub fn validate(&self, model: &ErdModel) -> ModelValidationResult {
        let mut result = ModelValidationResult::default();

        let mut seen = std::collections::HashSet::new();
        for table in &model.tables {
            if !seen.insert(table.key) {
                result
                    .violations
                    .push(ModelValidationError::DuplicateKey(table.key));
            }

            let primaries = table.fields.iter().filter(|f| f.is_primary).count();
            if !table.fields.is_empty() && primaries == 0 {
                result
                    .violations
                    .push(ModelValidationError::MissingPrimary(table.key));
            } else if primaries > 1 {
                result
                    .violations
                    .push(ModelValidationError::MultiplePrimaries(table.key, primaries));
            }
        }

        if let Some(first) = model.tables.first() {
            if first.key != ROOT_TABLE_KEY {
                result
                    .violations
                    .push(ModelValidationError::BadRootKey(first.key));
            }
        }

        for rel in &model.relationships {
            if rel.from == rel.to {
                result
                    .violations
                    .push(ModelValidationError::SelfLoop(rel.from));
            }
            for endpoint in [rel.from, rel.to] {
                if model.table(endpoint).is_none() {
                    result
                        .violations
                        .push(ModelValidationError::DanglingEndpoint(endpoint));
                }
            }
        }

        // Every non-root table came out of exactly one parent array.
        for table in &model.tables {
            if table.key == ROOT_TABLE_KEY {
                continue;
            }
            let containments = model
                .relationships_to(table.key)
                .filter(|r| r.text == "members")
                .count();
            if containments != 1 {
                result
                    .violations
                    .push(ModelValidationError::BadContainment(table.key, containments));
            }
        }

        result.reference_cycles = self.find_reference_cycles(model);
        result
    }

    /// Detect cycles among reference edges with a DFS over the directed
    /// table graph.
    fn find_reference_cycles(&self, model: &ErdModel) -> Vec<Vec<u32>> {
        let mut graph = Graph::<u32, (), Directed>::new();
        let mut nodes: HashMap<u32, NodeIndex> = HashMap::new();

        for table in &model.tables {
            nodes.insert(table.key, graph.add_node(table.key));
        }
        for rel in &model.relationships {
            if rel.text.starts_with("refers to") {
                if let (Some(&from), Some(&to)) = (nodes.get(&rel.from), nodes.get(&rel.to)) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        let mut cycles = Vec::new();
        for scc in petgraph::algo::tarjan_scc(&graph) {
            let is_cycle = scc.len() > 1
                || (scc.len() == 1 && graph.find_edge(scc[0], scc[0]).is_some());
            if is_cycle {
                let mut path: Vec<u32> = scc.iter().map(|&idx| graph[idx]).collect();
                path.sort_unstable();
                cycles.push(path);
            }
        }
        cycles
    }
}

impl Default for ModelValidator {
    fn default() -> Self {
        Self::new()
    }
}
