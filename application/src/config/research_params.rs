//! Research parameters: mode and attempt bound for company lookups.

use scout_domain::{DEFAULT_MAX_ATTEMPTS, ResearchMode, RetryPolicy};

/// Research behavior for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchParams {
    pub mode: ResearchMode,
    /// Attempt bound used by [`ResearchMode::Thorough`]
    pub max_attempts: u32,
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            mode: ResearchMode::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ResearchParams {
    pub fn with_mode(mut self, mode: ResearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.mode.retry_policy(self.max_attempts)
    }
}
