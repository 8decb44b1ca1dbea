//! Section splitting for labeled model responses.

use super::{ANALYSIS_MARKER, NOT_EXACT_MATCH, RAW_RESULTS_MARKER, UNKNOWN};
use serde::Serialize;

/// Classified final answer of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Determination {
    /// A usable value (domain, name, description, ...)
    Concrete(String),
    /// The model could not answer with confidence
    Unknown,
    /// The search matched a similarly named but different entity
    AmbiguousMatch,
}

impl Determination {
    /// Classify determination text. Blank text counts as unknown.
    pub fn from_text(text: &str) -> Self {
        match text.trim() {
            "" | UNKNOWN => Determination::Unknown,
            NOT_EXACT_MATCH => Determination::AmbiguousMatch,
            other => Determination::Concrete(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Determination::Concrete(value) => value,
            Determination::Unknown => UNKNOWN,
            Determination::AmbiguousMatch => NOT_EXACT_MATCH,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Determination::Unknown)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Determination::AmbiguousMatch)
    }
}

impl std::fmt::Display for Determination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three sections recovered from one response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedAnswer {
    /// Search results as quoted by the model (empty when unstructured)
    pub raw_results: String,
    /// The model's reasoning (empty when unstructured)
    pub analysis: String,
    /// Final answer text
    pub determination: String,
    /// Whether both markers were present
    pub structured: bool,
}

impl ExtractedAnswer {
    /// Classify the determination text
    pub fn verdict(&self) -> Determination {
        Determination::from_text(&self.determination)
    }
}

/// Split a model response into raw results, analysis and determination.
///
/// The response is trimmed first. With both markers present, the raw
/// results are the text before the analysis marker (minus the raw-results
/// marker); the text after the analysis marker is split on its first blank line into analysis and
/// determination. Without a blank line the determination is [`UNKNOWN`].
/// Without both markers the whole trimmed response is the determination.
///
/// # Examples
///
/// ```
/// use scout_domain::extraction::extract_answer;
///
/// let answer = extract_answer("RAW_SEARCH_RESULTS:\nfoo\nCLAUDE_ANALYSIS:\nbar\n\nacme.com");
/// assert_eq!(answer.raw_results, "foo");
/// assert_eq!(answer.analysis, "bar");
/// assert_eq!(answer.determination, "acme.com");
///
/// let answer = extract_answer("Just some text");
/// assert_eq!(answer.determination, "Just some text");
/// assert!(answer.raw_results.is_empty());
/// ```
pub fn extract_answer(response: &str) -> ExtractedAnswer {
    let response = response.trim();
    let unstructured = || ExtractedAnswer {
        determination: response.to_string(),
        ..Default::default()
    };

    if !response.contains(RAW_RESULTS_MARKER) {
        return unstructured();
    }
    let Some((head, tail)) = response.split_once(ANALYSIS_MARKER) else {
        return unstructured();
    };

    let raw_results = head.replacen(RAW_RESULTS_MARKER, "", 1).trim().to_string();

    let (analysis, determination) = match tail.split_once("\n\n") {
        Some((analysis, rest)) => (analysis.trim(), rest.trim()),
        None => (tail.trim(), UNKNOWN),
    };

    ExtractedAnswer {
        raw_results,
        analysis: analysis.to_string(),
        determination: determination.to_string(),
        structured: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_response() {
        let answer = extract_answer("RAW_SEARCH_RESULTS:\nfoo\nCLAUDE_ANALYSIS:\nbar\n\nacme.com");
        assert!(answer.structured);
        assert_eq!(answer.raw_results, "foo");
        assert_eq!(answer.analysis, "bar");
        assert_eq!(answer.determination, "acme.com");
        assert_eq!(answer.verdict(), Determination::Concrete("acme.com".to_string()));
    }

    #[test]
    fn test_determination_keeps_everything_after_first_blank_line() {
        let response = "RAW_SEARCH_RESULTS:\nr\nCLAUDE_ANALYSIS:\n- a\n- b\n\nAcme sells anvils.\n\nAnd rockets.\n";
        let answer = extract_answer(response);
        assert_eq!(answer.analysis, "- a\n- b");
        assert_eq!(answer.determination, "Acme sells anvils.\n\nAnd rockets.");
    }

    #[test]
    fn test_missing_blank_line_defaults_to_unknown() {
        let answer = extract_answer("RAW_SEARCH_RESULTS:\nfoo\nCLAUDE_ANALYSIS:\nbar only");
        assert_eq!(answer.raw_results, "foo");
        assert_eq!(answer.analysis, "bar only");
        assert_eq!(answer.determination, UNKNOWN);
        assert!(answer.verdict().is_unknown());
    }

    #[test]
    fn test_no_markers_echoes_response() {
        let answer = extract_answer("  Just some text \n");
        assert!(!answer.structured);
        assert_eq!(answer.determination, "Just some text");
        assert!(answer.raw_results.is_empty());
        assert!(answer.analysis.is_empty());
    }

    #[test]
    fn test_single_marker_is_unstructured() {
        let answer = extract_answer("CLAUDE_ANALYSIS:\nthinking\n\nacme.com");
        assert!(!answer.structured);
        assert_eq!(answer.determination, "CLAUDE_ANALYSIS:\nthinking\n\nacme.com");

        let answer = extract_answer("RAW_SEARCH_RESULTS:\nfoo\n\nacme.com");
        assert!(!answer.structured);
        assert!(answer.analysis.is_empty());
    }

    #[test]
    fn test_ambiguous_sentinel_detected() {
        let answer =
            extract_answer("RAW_SEARCH_RESULTS:\nAcme Corp\nCLAUDE_ANALYSIS:\nnot ours\n\nNOT_EXACT_MATCH");
        assert!(answer.verdict().is_ambiguous());
    }

    #[test]
    fn test_trailing_blank_line_is_not_a_boundary() {
        let answer = extract_answer("RAW_SEARCH_RESULTS:\nfoo\nCLAUDE_ANALYSIS:\nbar\n\n");
        assert_eq!(answer.analysis, "bar");
        assert_eq!(answer.determination, UNKNOWN);
        assert!(answer.verdict().is_unknown());

        let answer = extract_answer("RAW_SEARCH_RESULTS:\nfoo\nCLAUDE_ANALYSIS:\nbar\n\n   ");
        assert_eq!(answer.determination, UNKNOWN);
    }

    #[test]
    fn test_blank_determination_is_unknown() {
        assert!(Determination::from_text("").is_unknown());
        assert!(Determination::from_text("  \n").is_unknown());
    }

    #[test]
    fn test_only_first_analysis_marker_splits() {
        let answer = extract_answer(
            "RAW_SEARCH_RESULTS:\nx\nCLAUDE_ANALYSIS:\nsaw CLAUDE_ANALYSIS: quoted\n\nacme.io",
        );
        assert_eq!(answer.analysis, "saw CLAUDE_ANALYSIS: quoted");
        assert_eq!(answer.determination, "acme.io");
    }

    #[test]
    fn test_determination_display_uses_sentinels() {
        assert_eq!(Determination::Unknown.to_string(), "Unknown");
        assert_eq!(Determination::AmbiguousMatch.to_string(), "NOT_EXACT_MATCH");
        assert_eq!(Determination::Concrete("x.com".into()).to_string(), "x.com");
    }
}
