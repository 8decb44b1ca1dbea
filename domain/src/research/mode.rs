//! Research modes.
//!
//! Two variants of the company lookup exist: one retries ambiguous answers
//! and prints every attempt, the other makes one attempt and prints only the
//! result. Both are kept as selectable modes.

use crate::extraction::RetryPolicy;
use serde::{Deserialize, Serialize};

/// How a facet lookup retries and reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchMode {
    /// Retry ambiguous answers with clarifications; show every attempt
    #[default]
    Thorough,
    /// One attempt; show only the final answer unless verbose
    Quick,
}

impl ResearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchMode::Thorough => "thorough",
            ResearchMode::Quick => "quick",
        }
    }

    /// Retry policy for this mode given the configured attempt bound
    pub fn retry_policy(&self, max_attempts: u32) -> RetryPolicy {
        match self {
            ResearchMode::Thorough => RetryPolicy::new(max_attempts),
            ResearchMode::Quick => RetryPolicy::single_shot(),
        }
    }

    /// Whether each attempt's sections are printed
    pub fn shows_attempts(&self, verbose: bool) -> bool {
        match self {
            ResearchMode::Thorough => true,
            ResearchMode::Quick => verbose,
        }
    }
}

impl std::fmt::Display for ResearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "thorough" | "retry" => Ok(ResearchMode::Thorough),
            "quick" | "single" => Ok(ResearchMode::Quick),
            other => Err(format!(
                "unknown research mode '{}' (expected 'thorough' or 'quick')",
                other
            )),
        }
    }
}
