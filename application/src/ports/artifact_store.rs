//! Artifact store port
//!
//! Text files produced by a command (probe dumps, error reports) are handed
//! to an [`ArtifactStore`]; the filesystem adapter decides where they land.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not write {name}: {message}")]
pub struct ArtifactError {
    pub name: String,
    pub message: String,
}

/// Port for persisting named text artifacts
pub trait ArtifactStore: Send + Sync {
    /// Write `contents` under `name`, returning where it was stored
    fn save(&self, name: &str, contents: &str) -> Result<String, ArtifactError>;
}
