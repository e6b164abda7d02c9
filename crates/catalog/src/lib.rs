//! # Depmap Catalog
//!
//! Source-unit discovery: walks a project root, derives a qualified name for
//! every matching source file, and holds the per-unit dependency lists once
//! the extraction pipeline has assigned them.
//!
//! Qualified names are dot-separated paths relative to the project root with
//! the extension stripped (`pkg/sub/module.py` becomes `pkg.sub.module`) and
//! are unique across the catalog.

mod catalog;
mod error;
mod unit;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use unit::SourceUnit;
