//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: LLM models offered by the two providers
//! - [`query::Query`]: a validated prompt with an optional system instruction
//! - [`error::DomainError`]: domain-level errors
//! - [`validation::ConfigIssue`]: problems found in loaded configuration

pub mod error;
pub mod model;
pub mod query;
pub mod string;
pub mod validation;
