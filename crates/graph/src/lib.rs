//! # Depmap Graph
//!
//! Local dependency graph construction over a source-unit catalog.
//!
//! ```text
//! Catalog
//!     │
//!     ├──> Dependency Filter
//!     │      ├─ Keep tokens naming catalog units
//!     │      ├─ Drop self references
//!     │      └─ Dedup + sort (canonical output order)
//!     │
//!     ├──> Module Graph (petgraph)
//!     │      ├─ Nodes: qualified unit names
//!     │      └─ Edges: importer --> dependency
//!     │
//!     └──> Package Tree
//!            └─ Nested groupings, shared segments emitted once
//! ```

mod error;
mod filter;
mod hierarchy;
mod module_graph;

pub use error::{GraphError, Result};
pub use filter::filter_local_imports;
pub use hierarchy::{PackageNode, PackageTree};
pub use module_graph::ModuleGraph;
