//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid criterion choice: {0}")]
    InvalidCriterion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::InvalidQuery("empty".to_string());
        assert_eq!(error.to_string(), "Invalid query: empty");

        let error = DomainError::InvalidCriterion("9".to_string());
        assert_eq!(error.to_string(), "Invalid criterion choice: 9");
    }
}
