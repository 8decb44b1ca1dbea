//! Rendering of search answers and search failures.

use super::tool::SearchTool;
use crate::core::model::Model;

/// Append numbered citations and, for web search, the model footer.
pub fn format_search_result(
    tool: SearchTool,
    text: &str,
    citations: &[String],
    model: &Model,
) -> String {
    let mut result = text.to_string();

    if !citations.is_empty() {
        result.push_str("\n\nSources:\n");
        for (i, citation) in citations.iter().enumerate() {
            result.push_str(&format!("{}. {}\n", i + 1, citation));
        }
    }

    if tool.appends_model_footer() {
        result.push_str(&format!("\n\n(Results from Perplexity {})", model));
    }

    result
}

/// What went wrong with a search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Authentication,
    RateLimit,
    Timeout,
    Unclassified,
}

impl FailureKind {
    /// Keyword guess for failures that only carry a message
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("authentication") {
            FailureKind::Authentication
        } else if lower.contains("rate limit") {
            FailureKind::RateLimit
        } else if lower.contains("timeout") || lower.contains("timed out") {
            FailureKind::Timeout
        } else {
            FailureKind::Unclassified
        }
    }
}

/// Turn a failed search into the text returned in place of results.
///
/// Web search has fixed texts for authentication, rate-limit and timeout
/// failures; the other tools prefix the raw message.
pub fn describe_search_failure(tool: SearchTool, kind: FailureKind, message: &str) -> String {
    match tool {
        SearchTool::Web => match kind {
            FailureKind::Authentication => {
                "Error: Authentication failed. Please check the API key.".to_string()
            }
            FailureKind::RateLimit => "Error: Rate limit exceeded. Please try again later.".to_string(),
            FailureKind::Timeout => "Error: The request timed out. Please try again.".to_string(),
            FailureKind::Unclassified => format!("Error searching with Perplexity: {}", message),
        },
        SearchTool::Image => format!("Error searching for image information: {}", message),
        SearchTool::Fact => format!("Error answering factual question: {}", message),
    }
}
