//! Presentation-level configuration
//!
//! Configuration for terminal output.

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl OutputConfig {
    /// Apply the settings to the process-wide terminal state
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
