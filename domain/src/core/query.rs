//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A prompt sent to a text-generation service (Value Object)
///
/// Carries the user text and an optional system instruction. It has no
/// identity beyond its content and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
    system: Option<String>,
}

impl Query {
    /// Try to create a query, rejecting empty or whitespace-only content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "query text cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            content,
            system: None,
        })
    }

    /// Attach a system instruction
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Append an extra instruction to the user text (used for clarifications)
    pub fn with_suffix(mut self, suffix: Option<&str>) -> Self {
        if let Some(extra) = suffix {
            self.content.push_str(extra);
        }
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
