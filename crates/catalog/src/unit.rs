use std::path::{Path, PathBuf};

/// One source file discovered under the project root.
///
/// Created once at scan time, mutated exactly once when the pipeline assigns
/// the filtered dependency list, then treated as immutable for rendering.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    qualified_name: String,
    path: PathBuf,
    package_path: Vec<String>,
    leaf_name: String,
    dependencies: Vec<String>,
}

impl SourceUnit {
    pub fn new(qualified_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let qualified_name = qualified_name.into();
        let mut segments: Vec<String> = qualified_name.split('.').map(str::to_string).collect();
        let leaf_name = segments.pop().unwrap_or_default();

        Self {
            qualified_name,
            path: path.into(),
            package_path: segments,
            leaf_name,
            dependencies: Vec::new(),
        }
    }

    /// Dot-separated name derived from the root-relative path
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// On-disk path, used for reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the unit, used for sibling-import checks
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// All name segments but the last
    pub fn package_path(&self) -> &[String] {
        &self.package_path
    }

    /// Final name segment
    pub fn leaf_name(&self) -> &str {
        &self.leaf_name
    }

    /// Qualified names of local units this unit imports, sorted ascending.
    /// Empty until the pipeline assigns it.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Assign the filtered dependency list. Callers pass names already
    /// deduplicated and sorted; the list is stored as-is.
    pub fn set_dependencies(&mut self, dependencies: Vec<String>) {
        self.dependencies = dependencies;
    }
}

#[cfg(test)]
mod tests {
    use super::SourceUnit;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_qualified_name() {
        let unit = SourceUnit::new("pkg.sub.module", "/proj/pkg/sub/module.py");
        assert_eq!(unit.qualified_name(), "pkg.sub.module");
        assert_eq!(unit.package_path(), &["pkg".to_string(), "sub".to_string()]);
        assert_eq!(unit.leaf_name(), "module");
    }

    #[test]
    fn top_level_unit_has_empty_package_path() {
        let unit = SourceUnit::new("main", "/proj/main.py");
        assert!(unit.package_path().is_empty());
        assert_eq!(unit.leaf_name(), "main");
    }

    #[test]
    fn directory_is_parent_of_path() {
        let unit = SourceUnit::new("pkg.a", "/proj/pkg/a.py");
        assert_eq!(unit.directory(), std::path::Path::new("/proj/pkg"));
    }

    #[test]
    fn dependencies_start_empty() {
        let mut unit = SourceUnit::new("pkg.a", "/proj/pkg/a.py");
        assert!(unit.dependencies().is_empty());

        unit.set_dependencies(vec!["pkg.b".to_string()]);
        assert_eq!(unit.dependencies(), &["pkg.b".to_string()]);
    }
}
