use crate::error::{GraphError, Result};
use depmap_catalog::Catalog;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Directed module dependency graph derived from a populated catalog.
pub struct ModuleGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl ModuleGraph {
    /// Build the graph once every unit's dependency list is assigned.
    ///
    /// Every edge endpoint must name a catalog unit; a dangling dependency
    /// means the filtering stage let an external name through and fails
    /// construction.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        for unit in catalog.units() {
            let idx = graph.add_node(unit.qualified_name().to_string());
            index.insert(unit.qualified_name().to_string(), idx);
        }

        for unit in catalog.units() {
            let from = index[unit.qualified_name()];
            for dependency in unit.dependencies() {
                let to = *index.get(dependency).ok_or_else(|| {
                    GraphError::DanglingDependency {
                        unit: unit.qualified_name().to_string(),
                        dependency: dependency.clone(),
                    }
                })?;
                graph.add_edge(from, to, ());
            }
        }

        log::info!(
            "Built module graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self { graph, index })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of units importing `name`
    #[must_use]
    pub fn incoming_count(&self, name: &str) -> usize {
        self.index.get(name).map_or(0, |&idx| {
            self.graph
                .neighbors_directed(idx, Direction::Incoming)
                .count()
        })
    }

    /// Number of units `name` imports
    #[must_use]
    pub fn outgoing_count(&self, name: &str) -> usize {
        self.index.get(name).map_or(0, |&idx| {
            self.graph
                .neighbors_directed(idx, Direction::Outgoing)
                .count()
        })
    }

    /// All edges as (importer, dependency) pairs, importer-major then
    /// dependency-minor — the canonical output order.
    #[must_use]
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = self
            .graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].as_str(),
                    self.graph[edge.target()].as_str(),
                )
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}
