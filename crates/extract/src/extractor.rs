use crate::dialect::Dialect;
use crate::error::{ExtractError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static CPP_INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*#\s*include\s*"([^"]+)""#).expect("valid include regex"));

/// Extract raw import tokens from a source file.
///
/// Fails only when the file cannot be opened or decoded; malformed statements
/// are skipped silently.
pub fn extract_imports(path: impl AsRef<Path>, dialect: Dialect) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tokens = extract_imports_from_source(&content, dialect);
    log::debug!("{}: {} import candidates", path.display(), tokens.len());
    Ok(tokens)
}

/// Extract raw import tokens from source text, one per recognized statement.
pub fn extract_imports_from_source(content: &str, dialect: Dialect) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| match dialect {
            Dialect::Python => python_import_token(line),
            Dialect::Cpp => cpp_include_token(line),
        })
        .collect()
}

/// Module token of one Python import line, if the line is one.
///
/// `import X [as Z]` and `from X import Y` both yield `X`; leading dots of a
/// relative form are stripped. `from . import b` names a sibling directly, so
/// the first imported symbol is used as the token and left for sibling
/// resolution to qualify.
fn python_import_token(line: &str) -> Option<String> {
    let trimmed = line.trim_start();

    if let Some(rest) = trimmed.strip_prefix("import ") {
        let first = rest.split_whitespace().next()?.trim_end_matches(',');
        let token = first.trim_start_matches('.');
        return (!token.is_empty()).then(|| token.to_string());
    }

    let rest = trimmed.strip_prefix("from ")?;
    let mut words = rest.split_whitespace();
    let module = words.next()?;

    let stripped = module.trim_start_matches('.');
    if !stripped.is_empty() {
        return Some(stripped.to_string());
    }

    if words.next()? != "import" {
        return None;
    }
    let name = words.next()?.trim_end_matches(',');
    (!name.is_empty() && name != "*" && name != "(").then(|| name.to_string())
}

/// Include token of one C++ line. Only quoted includes are local candidates;
/// angle-bracket includes are always external.
fn cpp_include_token(line: &str) -> Option<String> {
    let raw = CPP_INCLUDE.captures(line)?.get(1)?.as_str();
    Some(normalize_include_path(raw))
}

/// `dir/header.hpp` becomes `dir.header`, the catalog's qualified form.
fn normalize_include_path(raw: &str) -> String {
    Path::new(raw)
        .with_extension("")
        .to_string_lossy()
        .replace(['/', '\\'], ".")
}
