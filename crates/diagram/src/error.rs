use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiagramError>;

#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Failed to write diagram to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write diagram to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("Failed to launch plantuml: {0}")]
    RendererLaunch(#[source] std::io::Error),

    #[error("plantuml exited with {status}")]
    RendererFailed { status: ExitStatus },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
