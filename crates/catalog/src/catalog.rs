use crate::error::{CatalogError, Result};
use crate::unit::SourceUnit;
use depmap_extract::Dialect;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// The set of source units discovered under one project root.
///
/// Owned by the top-level run and passed by reference to each pipeline stage.
/// Units are kept sorted by qualified name so every downstream iteration is
/// deterministic.
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
    units: Vec<SourceUnit>,
}

impl Catalog {
    /// Scan `root` for the dialect's source files and build the catalog.
    ///
    /// The walker honors `.gitignore` and skips hidden entries; fixed
    /// excluded file names (e.g. `conf.py`) are dropped. Zero matches is a
    /// valid, empty catalog.
    pub fn scan(root: impl AsRef<Path>, dialect: Dialect) -> Result<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(CatalogError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(CatalogError::RootNotADirectory(root.to_path_buf()));
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkBuilder::new(root).build() {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !dialect.extensions().contains(&ext.to_lowercase().as_str()) {
                continue;
            }

            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if dialect.excluded_file_names().contains(&file_name) {
                continue;
            }

            files.push(path);
        }
        files.sort();

        let units = files
            .into_iter()
            .filter_map(|path| unit_name(&path, root).map(|name| SourceUnit::new(name, path)))
            .collect();

        let catalog = Self::from_units(root, units)?;
        log::info!(
            "Cataloged {} {} units under {}",
            catalog.len(),
            dialect,
            root.display()
        );
        Ok(catalog)
    }

    /// Build a catalog from pre-constructed units, enforcing name uniqueness.
    pub fn from_units(root: impl Into<PathBuf>, mut units: Vec<SourceUnit>) -> Result<Self> {
        units.sort_by(|a, b| a.qualified_name().cmp(b.qualified_name()));

        for pair in units.windows(2) {
            if pair[0].qualified_name() == pair[1].qualified_name() {
                return Err(CatalogError::DuplicateUnit(
                    pair[0].qualified_name().to_string(),
                ));
            }
        }

        Ok(Self {
            root: root.into(),
            units,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted qualified names of every unit
    pub fn names(&self) -> Vec<String> {
        self.units
            .iter()
            .map(|u| u.qualified_name().to_string())
            .collect()
    }

    /// Units in qualified-name order
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [SourceUnit] {
        &mut self.units
    }

    pub fn get(&self, qualified_name: &str) -> Option<&SourceUnit> {
        self.units
            .binary_search_by(|u| u.qualified_name().cmp(qualified_name))
            .ok()
            .map(|i| &self.units[i])
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Derive the qualified unit name: strip the root prefix and the extension,
/// then join the remaining path segments with dots.
fn unit_name(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let stem = relative.with_extension("");

    let segments: Vec<String> = stem
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() || segments.iter().any(String::is_empty) {
        return None;
    }
    Some(segments.join("."))
}
