use depmap_catalog::Catalog;
use std::collections::BTreeMap;

/// Nested package groupings implied by the catalog's package paths.
///
/// A segment shared by multiple units appears once. A unit attaches to the
/// node for its full package path; top-level units attach to the root.
#[derive(Debug, Default)]
pub struct PackageTree {
    root: PackageNode,
}

#[derive(Debug, Default)]
pub struct PackageNode {
    children: BTreeMap<String, PackageNode>,
    units: Vec<String>,
}

impl PackageTree {
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        let mut root = PackageNode::default();

        for unit in catalog.units() {
            let mut node = &mut root;
            for segment in unit.package_path() {
                node = node.children.entry(segment.clone()).or_default();
            }
            node.units.push(unit.qualified_name().to_string());
        }

        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &PackageNode {
        &self.root
    }
}

impl PackageNode {
    /// Child groupings in segment-name order
    pub fn children(&self) -> impl Iterator<Item = (&str, &PackageNode)> {
        self.children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Units whose deepest grouping is this node, in qualified-name order
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }
}
