//! # Depmap Extract
//!
//! Lexical import extraction for the supported source dialects.
//!
//! Extraction is line-oriented: a line participates only if, after stripping
//! leading whitespace, it begins with the dialect's trigger token. Multi-line
//! statements, imports nested inside blocks, and commented-out lines that
//! still start with a trigger keyword are matched or missed lexically; no AST
//! is built.

mod dialect;
mod error;
mod extractor;
mod resolver;

pub use dialect::Dialect;
pub use error::{ExtractError, Result};
pub use extractor::{extract_imports, extract_imports_from_source};
pub use resolver::resolve_sibling;
