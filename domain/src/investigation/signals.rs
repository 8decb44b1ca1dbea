//! Control signals read out of free-text assistant replies.
//!
//! The investigation loop reacts to phrases in the model's prose: a proposed
//! search query, an invitation to pick another criterion, a statement that
//! the investigation is complete. None of this is a protocol. The model is
//! only asked to use these phrases and may paraphrase, so every signal is
//! reported with [`Confidence::Heuristic`] and callers must tolerate both
//! missed and spurious signals.

use regex::Regex;
use std::sync::LazyLock;

/// How much a detected signal can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Derived from phrase matching on free text
    Heuristic,
}

/// Signals detected in one assistant reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplySignals {
    /// Query text following "search query:" / "suggest searching for:"
    pub proposed_query: Option<String>,
    /// The reply invites choosing another criterion
    pub offers_next_criterion: bool,
    /// The reply declares the investigation finished
    pub investigation_complete: bool,
}

impl ReplySignals {
    pub fn confidence(&self) -> Confidence {
        Confidence::Heuristic
    }
}

/// Classifies assistant replies into loop signals
pub trait SignalClassifier: Send + Sync {
    fn classify(&self, reply: &str) -> ReplySignals;
}

static QUERY_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)search query:([^\n]*)").expect("static regex"),
        Regex::new(r"(?i)suggest searching for:([^\n]*)").expect("static regex"),
    ]
});

const NEXT_CRITERION_PHRASES: [&str; 3] = [
    "another criterion",
    "next criterion",
    "would you like to investigate",
];

const COMPLETE_PHRASES: [&str; 2] = ["investigation complete", "investigation is complete"];

/// Case-insensitive phrase matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSignalClassifier;

impl KeywordSignalClassifier {
    /// Text after the first "search query:" marker, else after the first
    /// "suggest searching for:" marker, up to the end of that line.
    pub fn proposed_query(reply: &str) -> Option<String> {
        QUERY_PATTERNS.iter().find_map(|pattern| {
            pattern
                .captures(reply)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
    }
}

impl SignalClassifier for KeywordSignalClassifier {
    fn classify(&self, reply: &str) -> ReplySignals {
        let lower = reply.to_lowercase();
        ReplySignals {
            proposed_query: Self::proposed_query(reply),
            offers_next_criterion: NEXT_CRITERION_PHRASES.iter().any(|p| lower.contains(p)),
            investigation_complete: COMPLETE_PHRASES.iter().any(|p| lower.contains(p)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_search_query_line() {
        let reply = "Let me look.\nSearch query: Acme Software employees LinkedIn\nThen we'll see.";
        let signals = KeywordSignalClassifier.classify(reply);
        assert_eq!(
            signals.proposed_query.as_deref(),
            Some("Acme Software employees LinkedIn")
        );
        assert_eq!(signals.confidence(), Confidence::Heuristic);
    }

    #[test]
    fn test_search_query_takes_precedence_over_suggestion() {
        let reply = "I suggest searching for: acme funding\nSEARCH QUERY: acme venture capital";
        assert_eq!(
            KeywordSignalClassifier::proposed_query(reply).as_deref(),
            Some("acme venture capital")
        );
    }

    #[test]
    fn test_suggestion_at_end_of_text() {
        assert_eq!(
            KeywordSignalClassifier::proposed_query("Suggest searching for: acme owner age").as_deref(),
            Some("acme owner age")
        );
    }

    #[test]
    fn test_criterion_and_completion_phrases() {
        let signals = KeywordSignalClassifier.classify("Would you like to investigate the next criterion?");
        assert!(signals.offers_next_criterion);
        assert!(!signals.investigation_complete);
        assert!(signals.proposed_query.is_none());

        let signals = KeywordSignalClassifier.classify("All five are covered. Investigation complete.");
        assert!(signals.investigation_complete);
    }

    #[test]
    fn test_plain_reply_has_no_signals() {
        assert_eq!(
            KeywordSignalClassifier.classify("The company has 12 employees."),
            ReplySignals::default()
        );
    }
}
