//! Retry decisions for ambiguous determinations.

use super::DEFAULT_MAX_ATTEMPTS;
use super::extractor::Determination;

/// What the caller should do after extracting an attempt's determination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Stop and return this determination (never ambiguous)
    Accept(Determination),
    /// Re-issue the request with a clarification, as attempt `next_attempt`
    Retry { next_attempt: u32 },
    /// Attempts exhausted while still ambiguous; the result is unknown
    GiveUp,
}

/// Decide the next step for a zero-based `attempt` out of `max_attempts`.
///
/// Only [`Determination::AmbiguousMatch`] triggers a retry, and only while
/// `attempt < max_attempts - 1`.
///
/// ```
/// use scout_domain::extraction::{Determination, RetryDecision, next_step};
///
/// assert_eq!(
///     next_step(&Determination::AmbiguousMatch, 0, 3),
///     RetryDecision::Retry { next_attempt: 1 }
/// );
/// assert_eq!(next_step(&Determination::AmbiguousMatch, 2, 3), RetryDecision::GiveUp);
/// ```
pub fn next_step(determination: &Determination, attempt: u32, max_attempts: u32) -> RetryDecision {
    match determination {
        Determination::AmbiguousMatch if attempt.saturating_add(1) < max_attempts => {
            RetryDecision::Retry {
                next_attempt: attempt + 1,
            }
        }
        Determination::AmbiguousMatch => RetryDecision::GiveUp,
        other => RetryDecision::Accept(other.clone()),
    }
}

/// Extra instruction appended to the user message on a retry.
///
/// Attempt 0 has none. The final attempt stresses that it is the last one;
/// attempts in between ask for an exact match on `target` (e.g. "company
/// name") called `subject`.
pub fn clarification(target: &str, subject: &str, attempt: u32, max_attempts: u32) -> Option<String> {
    if attempt == 0 {
        return None;
    }
    if attempt.saturating_add(1) >= max_attempts {
        Some(format!(
            " This is your last attempt. It's critical to find information ONLY for the EXACT company '{}', not any similar companies.",
            subject
        ))
    } else {
        Some(format!(
            " Please search specifically for the EXACT {} '{}' and verify it matches exactly.",
            target, subject
        ))
    }
}

/// Attempt bound for one logical query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    /// A policy allowing `max_attempts` attempts (at least one)
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// A single attempt; ambiguous answers resolve to unknown immediately
    pub fn single_shot() -> Self {
        Self::new(1)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn next_step(&self, determination: &Determination, attempt: u32) -> RetryDecision {
        next_step(determination, attempt, self.max_attempts)
    }

    pub fn clarification(&self, target: &str, subject: &str, attempt: u32) -> Option<String> {
        clarification(target, subject, attempt, self.max_attempts)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
