//! JSON persistence of a [`CompanyProfile`].

use scout_domain::CompanyProfile;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileFileError {
    #[error("Could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write `profile` as pretty-printed JSON (two-space indent).
pub fn write_profile(path: &Path, profile: &CompanyProfile) -> Result<(), ProfileFileError> {
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, json).map_err(|source| ProfileFileError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acme.json");
        let profile = CompanyProfile::matched("Acme", "acme.com", "Jane Doe", "Anvils.");

        write_profile(&path, &profile).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"company_name\": \"Acme\""));
        let parsed: CompanyProfile = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("acme.json");
        let err = write_profile(&path, &CompanyProfile::unmatched("Acme")).unwrap_err();
        assert!(matches!(err, ProfileFileError::Io { .. }));
    }
}
