//! Filesystem [`ArtifactStore`] writing into one directory.

use scout_application::ports::artifact_store::{ArtifactError, ArtifactStore};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes artifacts as UTF-8 files under a base directory
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactStore for FsArtifactStore {
    fn save(&self, name: &str, contents: &str) -> Result<String, ArtifactError> {
        let error = |e: std::io::Error| ArtifactError {
            name: name.to_string(),
            message: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(error)?;
        let path = self.dir.join(name);
        std::fs::write(&path, contents).map_err(error)?;
        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path().join("probe"));

        store.save("perplexity_response.txt", "first").unwrap();
        let location = store.save("perplexity_response.txt", "second").unwrap();

        assert!(location.ends_with("perplexity_response.txt"));
        assert_eq!(std::fs::read_to_string(&location).unwrap(), "second");
    }

    #[test]
    fn test_save_reports_name_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = FsArtifactStore::new(&blocker).save("out.txt", "x").unwrap_err();
        assert_eq!(err.name, "out.txt");
    }
}
