//! Acquisition criteria.

use crate::core::error::DomainError;

/// The fixed acquisition criteria, as questions
pub const CRITERIA: [&str; 5] = [
    "Is the company selling an actual software product, not software development services?",
    "Does the company have 5-50 employees based in the USA or Canada?",
    "Does the company sell boring, stable 'vertical market software' that's deeply embedded in an industry?",
    "Is the company bootstrapped (or friends and family funded) with no Venture Capital?",
    "Are the company owners older (50+)?",
];

/// A criterion picked from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// One of [`CRITERIA`], zero-based
    Listed(usize),
    /// A question typed by the user
    Custom(String),
}

impl Criterion {
    /// Text sent to the model ("N. question" for listed criteria)
    pub fn text(&self) -> String {
        match self {
            Criterion::Listed(index) => format!("{}. {}", index + 1, CRITERIA[*index]),
            Criterion::Custom(question) => question.clone(),
        }
    }
}

/// Menu choice before a custom question is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionChoice {
    Listed(usize),
    Custom,
}

/// Number of menu entries (criteria plus "Custom question")
pub fn menu_len() -> usize {
    CRITERIA.len() + 1
}

/// Parse a one-based menu selection.
pub fn parse_choice(input: &str) -> Result<CriterionChoice, DomainError> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidCriterion("Please enter a valid number.".to_string()))?;

    match number {
        n if (1..=CRITERIA.len()).contains(&n) => Ok(CriterionChoice::Listed(n - 1)),
        n if n == menu_len() => Ok(CriterionChoice::Custom),
        _ => Err(DomainError::InvalidCriterion(format!(
            "Please enter a number between 1 and {}",
            menu_len()
        ))),
    }
}
