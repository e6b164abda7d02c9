//! # Depmap Diagram
//!
//! Serialization of the module dependency graph: the PlantUML component
//! diagram, a deterministic JSON graph export, and the invocation of the
//! external PlantUML renderer.

mod error;
mod export;
mod output;
mod plantuml;

pub use error::{DiagramError, Result};
pub use export::{export_graph, to_json, EdgeExport, GraphExport, UnitExport, GRAPH_EXPORT_VERSION};
pub use output::{render_image, write_output};
pub use plantuml::render_plantuml;
