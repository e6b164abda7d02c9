use depmap_catalog::{Catalog, SourceUnit};
use depmap_graph::{ModuleGraph, PackageNode, PackageTree};

const INITIALIZER_LEAF: &str = "__init__";

/// Serialize the catalog as a PlantUML component diagram.
///
/// Package frames nest depth-first in segment order, each unit is declared
/// once inside its deepest enclosing frame, and all edges follow the
/// declarations in importer-major order. Output is byte-identical across runs
/// over the same catalog.
#[must_use]
pub fn render_plantuml(catalog: &Catalog, tree: &PackageTree, graph: &ModuleGraph) -> String {
    let mut out = String::new();
    out.push_str("@startuml\n");
    out.push_str("skinparam linetype ortho\n");

    render_node(&mut out, tree.root(), "", catalog, graph);

    for (from, to) in graph.edges() {
        out.push_str(&format!("[{from}] --> [{to}]\n"));
    }

    out.push_str("@enduml\n");
    out
}

fn render_node(
    out: &mut String,
    node: &PackageNode,
    prefix: &str,
    catalog: &Catalog,
    graph: &ModuleGraph,
) {
    for name in node.units() {
        let Some(unit) = catalog.get(name) else {
            continue;
        };
        if is_rendered(unit, graph) {
            out.push_str(&format!(
                "[{}] as {}\n",
                unit.leaf_name(),
                unit.qualified_name()
            ));
        }
    }

    for (segment, child) in node.children() {
        // A frame whose subtree renders nothing would be an empty box.
        if !subtree_has_rendered(child, catalog, graph) {
            continue;
        }

        let qualified = if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        };
        out.push_str(&format!("frame {segment} as {qualified} {{\n"));
        render_node(out, child, &qualified, catalog, graph);
        out.push_str("}\n");
    }
}

fn subtree_has_rendered(node: &PackageNode, catalog: &Catalog, graph: &ModuleGraph) -> bool {
    node.units()
        .iter()
        .any(|name| catalog.get(name).is_some_and(|u| is_rendered(u, graph)))
        || node
            .children()
            .any(|(_, child)| subtree_has_rendered(child, catalog, graph))
}

/// An initializer module that neither imports nor is imported carries no
/// information and is omitted from the diagram.
fn is_rendered(unit: &SourceUnit, graph: &ModuleGraph) -> bool {
    unit.leaf_name() != INITIALIZER_LEAF
        || !unit.dependencies().is_empty()
        || graph.incoming_count(unit.qualified_name()) > 0
}
