use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Project root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Project root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Two source files map to the same unit name: {0}")]
    DuplicateUnit(String),
}
