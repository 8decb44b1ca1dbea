//! File output: command artifacts and company profiles.

mod fs_artifact_store;
mod profile_file;

pub use fs_artifact_store::FsArtifactStore;
pub use profile_file::{ProfileFileError, write_profile};
