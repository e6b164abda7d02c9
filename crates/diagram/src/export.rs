use crate::error::Result;
use depmap_catalog::Catalog;
use depmap_graph::ModuleGraph;
use serde::{Deserialize, Serialize};

pub const GRAPH_EXPORT_VERSION: u32 = 1;

/// Machine-readable dependency graph document.
///
/// Deterministic and diff-friendly: units in qualified-name order, edges in
/// the canonical importer-major order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub version: u32,
    pub root: String,
    pub units: Vec<UnitExport>,
    pub edges: Vec<EdgeExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitExport {
    pub qualified_name: String,
    pub path: String,
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeExport {
    pub from: String,
    pub to: String,
}

#[must_use]
pub fn export_graph(catalog: &Catalog, graph: &ModuleGraph) -> GraphExport {
    let units = catalog
        .units()
        .iter()
        .map(|unit| UnitExport {
            qualified_name: unit.qualified_name().to_string(),
            path: unit.path().to_string_lossy().into_owned(),
            dependencies: unit.dependencies().to_vec(),
        })
        .collect();

    let edges = graph
        .edges()
        .into_iter()
        .map(|(from, to)| EdgeExport {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect();

    GraphExport {
        version: GRAPH_EXPORT_VERSION,
        root: catalog.root().to_string_lossy().into_owned(),
        units,
        edges,
    }
}

pub fn to_json(export: &GraphExport) -> Result<String> {
    Ok(serde_json::to_string_pretty(export)?)
}
