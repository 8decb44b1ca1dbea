//! Research configuration from TOML (`[research]` section)

use scout_domain::{DEFAULT_MAX_ATTEMPTS, ResearchMode};
use serde::{Deserialize, Serialize};

/// Raw research configuration from TOML
///
/// ```toml
/// [research]
/// mode = "quick"      # or "thorough"
/// max_attempts = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    pub mode: ResearchMode,
    /// Attempts per facet in thorough mode
    pub max_attempts: u32,
}

impl Default for FileResearchConfig {
    fn default() -> Self {
        Self {
            mode: ResearchMode::Thorough,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
