//! Domain layer for company-scout
//!
//! This crate contains the pure logic of the tools: answer extraction,
//! prompts, and value objects. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Confident answers
//!
//! Research prompts ask a model for raw results, an analysis and a final
//! determination. [`extraction`] splits such a response and decides whether
//! an ambiguous answer warrants another attempt.
//!
//! ## Subdomains
//!
//! - [`research`]: company facets (website, owner, products) and the profile record
//! - [`search`]: web / image / factual search tools
//! - [`investigation`]: criteria-driven interactive investigation

pub mod conversation;
pub mod core;
pub mod extraction;
pub mod investigation;
pub mod research;
pub mod search;

// Re-export commonly used types
pub use conversation::{Completion, Conversation, Message, Role, StreamEvent};
pub use core::{
    error::DomainError,
    model::Model,
    query::Query,
    string::preview,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use extraction::{
    DEFAULT_MAX_ATTEMPTS, Determination, ExtractedAnswer, NOT_EXACT_MATCH, RetryDecision,
    RetryPolicy, UNKNOWN, extract_answer, next_step,
};
pub use investigation::{CompanyLead, Criterion, KeywordSignalClassifier, SignalClassifier};
pub use research::{CompanyProfile, Facet, ResearchMode};
pub use search::{FailureKind, SearchTool, describe_search_failure, format_search_result};
