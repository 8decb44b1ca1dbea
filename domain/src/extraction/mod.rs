//! Confident-answer extraction
//!
//! Research prompts ask the model to answer in three labeled sections:
//!
//! ```text
//! RAW_SEARCH_RESULTS:
//! <what the search returned>
//! CLAUDE_ANALYSIS:
//! <how the model evaluated it>
//!
//! <final determination>
//! ```
//!
//! The provider does not enforce that layout, so extraction is lenient and
//! never fails. The determination is either a concrete value, the
//! [`UNKNOWN`] sentinel, or the [`NOT_EXACT_MATCH`] sentinel meaning the
//! search hit a similarly named but different entity.
//!
//! # Per-query state machine
//!
//! ```text
//! INITIAL ──request──▶ RESPONSE_RECEIVED ──extract──┬─▶ CONCRETE  (done)
//!    ▲                                              ├─▶ UNKNOWN   (done)
//!    │                                              └─▶ AMBIGUOUS
//!    └──────────── attempt < max - 1 ◀─────────────────────┤
//!                                    otherwise ─▶ UNKNOWN  (done)
//! ```
//!
//! [`extract_answer`] and [`next_step`] are pure; the request loop that
//! drives them belongs to the caller.

pub mod extractor;
pub mod retry;

pub use extractor::{Determination, ExtractedAnswer, extract_answer};
pub use retry::{RetryDecision, RetryPolicy, clarification, next_step};

/// Label opening the raw search results section
pub const RAW_RESULTS_MARKER: &str = "RAW_SEARCH_RESULTS:";

/// Label opening the analysis section
pub const ANALYSIS_MARKER: &str = "CLAUDE_ANALYSIS:";

/// Sentinel for "no confident answer"
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for "found a different entity with a similar name"
pub const NOT_EXACT_MATCH: &str = "NOT_EXACT_MATCH";

/// Default bound on attempts for one query
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
