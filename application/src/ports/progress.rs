//! Research progress port
//!
//! Defines the callbacks fired while a facet lookup runs its attempts.
//! Implementations live in the presentation layer.

use scout_domain::{Determination, ExtractedAnswer, Facet};

/// Callback for progress updates during a company lookup
pub trait ResearchProgress: Send + Sync {
    /// Called once before the first attempt of a facet
    fn on_facet_start(&self, _facet: Facet, _subject: &str) {}

    /// Called before each request (zero-based `attempt`)
    fn on_attempt_start(&self, facet: Facet, subject: &str, attempt: u32, max_attempts: u32);

    /// Called with the sections extracted from an attempt's response
    fn on_attempt_parsed(&self, facet: Facet, subject: &str, attempt: u32, answer: &ExtractedAnswer);

    /// Called when a request failed; `message` is what stands in for the answer
    fn on_request_failed(&self, _facet: Facet, _subject: &str, _attempt: u32, _message: &str) {}

    /// Called when every attempt came back ambiguous
    fn on_attempts_exhausted(&self, _facet: Facet, _subject: &str, _max_attempts: u32) {}

    /// Called with the facet's final determination
    fn on_facet_complete(&self, _facet: Facet, _determination: &Determination) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoResearchProgress;

impl ResearchProgress for NoResearchProgress {
    fn on_attempt_start(&self, _facet: Facet, _subject: &str, _attempt: u32, _max: u32) {}
    fn on_attempt_parsed(&self, _facet: Facet, _subject: &str, _attempt: u32, _answer: &ExtractedAnswer) {}
}
