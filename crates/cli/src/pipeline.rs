use crate::Args;
use anyhow::{Context, Result};
use depmap_catalog::Catalog;
use depmap_extract::{extract_imports, resolve_sibling};
use depmap_graph::{filter_local_imports, ModuleGraph, PackageTree};

/// Run the scan → extract → resolve → filter → render pipeline.
///
/// Purely sequential: each stage completes over the whole catalog before the
/// next begins, and the catalog captured at scan time is never re-scanned.
pub fn run(args: &Args) -> Result<()> {
    let dialect = args.dialect;

    let mut catalog = Catalog::scan(&args.project, dialect)
        .with_context(|| format!("Failed to scan {}", args.project.display()))?;
    let names = catalog.names();

    let mut dependency_lists = Vec::with_capacity(catalog.len());
    for unit in catalog.units() {
        let tokens = extract_imports(unit.path(), dialect)?;
        let resolved: Vec<String> = tokens
            .iter()
            .map(|token| resolve_sibling(token, unit.directory(), unit.package_path(), dialect))
            .collect();
        dependency_lists.push(filter_local_imports(&resolved, &names, unit.qualified_name()));
    }
    for (unit, dependencies) in catalog.units_mut().iter_mut().zip(dependency_lists) {
        unit.set_dependencies(dependencies);
    }

    let graph = ModuleGraph::from_catalog(&catalog)?;
    log::info!(
        "Rendering {} units to {}",
        catalog.len(),
        args.output_file
            .as_deref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
    );

    let text = if args.json {
        let mut json = depmap_diagram::to_json(&depmap_diagram::export_graph(&catalog, &graph))?;
        json.push('\n');
        json
    } else {
        let tree = PackageTree::build(&catalog);
        depmap_diagram::render_plantuml(&catalog, &tree, &graph)
    };

    depmap_diagram::write_output(&text, args.output_file.as_deref())?;

    if let (Some(output_file), Some(image_type)) = (&args.output_file, &args.image_type) {
        depmap_diagram::render_image(output_file, &image_type.to_lowercase())?;
    }

    Ok(())
}
