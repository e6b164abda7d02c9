use crate::dialect::Dialect;
use std::path::Path;

/// Promote a bare sibling import to the importer's fully qualified form.
///
/// Same-directory imports are commonly written as bare names. When
/// `<token>.<ext>` exists next to the importer, the token is rewritten to the
/// importer's package path joined with the token so it can match a catalog
/// name; any other token is returned unchanged. One file-existence check per
/// dialect extension, no shared state.
pub fn resolve_sibling(
    token: &str,
    importer_dir: &Path,
    package_path: &[String],
    dialect: Dialect,
) -> String {
    let names_sibling = dialect
        .sibling_extensions()
        .iter()
        .any(|ext| importer_dir.join(format!("{token}.{ext}")).is_file());

    if !names_sibling || package_path.is_empty() {
        // A sibling of a top-level importer already carries its qualified name.
        return token.to_string();
    }

    format!("{}.{}", package_path.join("."), token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn pkg(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn sibling_is_promoted() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.py"), "").expect("write fixture");

        let resolved = resolve_sibling("b", dir.path(), &pkg(&["pkg"]), Dialect::Python);
        assert_eq!(resolved, "pkg.b");
    }

    #[test]
    fn nested_package_prefix() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("util.py"), "").expect("write fixture");

        let resolved = resolve_sibling("util", dir.path(), &pkg(&["a", "b"]), Dialect::Python);
        assert_eq!(resolved, "a.b.util");
    }

    #[test]
    fn non_sibling_is_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");

        let resolved = resolve_sibling("os", dir.path(), &pkg(&["pkg"]), Dialect::Python);
        assert_eq!(resolved, "os");
    }

    #[test]
    fn top_level_sibling_is_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.py"), "").expect("write fixture");

        // With no package path the bare name already matches the catalog.
        let resolved = resolve_sibling("b", dir.path(), &[], Dialect::Python);
        assert_eq!(resolved, "b");
    }

    #[test]
    fn cpp_header_sibling_is_promoted() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("shape.h"), "").expect("write fixture");

        let resolved = resolve_sibling("shape", dir.path(), &pkg(&["geometry"]), Dialect::Cpp);
        assert_eq!(resolved, "geometry.shape");
    }

    #[test]
    fn dotted_token_is_never_a_sibling() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.py"), "").expect("write fixture");

        let resolved = resolve_sibling("pkg.b", dir.path(), &pkg(&["pkg"]), Dialect::Python);
        assert_eq!(resolved, "pkg.b");
    }
}
