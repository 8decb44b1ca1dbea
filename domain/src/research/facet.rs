//! Company facets and the prompts that look them up.

use crate::extraction::{ANALYSIS_MARKER, NOT_EXACT_MATCH, RAW_RESULTS_MARKER, UNKNOWN};

/// One attribute of a company resolved by a research lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Official website domain
    Website,
    /// Owner, CEO or founder
    Owner,
    /// Products or services offered
    Products,
}

impl Facet {
    /// All facets in lookup order
    pub const ALL: [Facet; 3] = [Facet::Website, Facet::Owner, Facet::Products];

    /// Heading used in attempt banners
    pub fn title(&self) -> &'static str {
        match self {
            Facet::Website => "WEBSITE",
            Facet::Owner => "OWNER/CEO",
            Facet::Products => "PRODUCTS/SERVICES",
        }
    }

    /// Lower-case noun for progress and warning messages
    pub fn noun(&self) -> &'static str {
        match self {
            Facet::Website => "website",
            Facet::Owner => "owner",
            Facet::Products => "products",
        }
    }

    /// Status line shown before the lookup starts
    /// What a retry asks the model to match exactly
    pub fn match_target(&self) -> &'static str {
        match self {
            Facet::Website => "company name",
            Facet::Owner | Facet::Products => "company",
        }
    }

    pub fn status_line(&self) -> &'static str {
        match self {
            Facet::Website => "Finding company website...",
            Facet::Owner => "Identifying company leadership...",
            Facet::Products => "Determining company offerings...",
        }
    }

    /// Build the user message. `website` is ignored for [`Facet::Website`].
    pub fn user_message(&self, company: &str, website: &str) -> String {
        match self {
            Facet::Website => format!("Find the official website domain for: {}", company),
            Facet::Owner => format!(
                "Who is the current owner, CEO, or main founder of {}? Their website is {}.",
                company, website
            ),
            Facet::Products => format!(
                "What products or services does {} sell or provide? Their website is {}.",
                company, website
            ),
        }
    }

    /// System prompt requesting the labeled three-section answer
    pub fn system_prompt(&self) -> String {
        let (task, search_terms, extra_step, found) = match self {
            Facet::Website => (
                "find the official website/domain for the company specified",
                "\"official website\"",
                None,
                "return the primary domain (e.g., \"company.com\")",
            ),
            Facet::Owner => (
                "find the current owner, CEO, or founder of the specified company",
                "\"CEO owner founder leadership\"",
                Some("List all potential leadership/ownership information found"),
                "return only the person's name (e.g., \"John Smith\")",
            ),
            Facet::Products => (
                "identify what products or services the specified company sells or provides",
                "\"products services offerings what they sell\"",
                Some("Identify all potential products/services mentioned"),
                "provide a concise 2-3 sentence description of their products/services",
            ),
        };

        let mut analysis_steps = vec![
            "List all company names mentioned in the search results".to_string(),
            "Indicate whether any of these EXACTLY match the provided company name (case-insensitive)"
                .to_string(),
        ];
        if let Some(step) = extra_step {
            analysis_steps.push(step.to_string());
        }
        analysis_steps.push("Explain your reasoning in detail".to_string());
        let analysis_steps = analysis_steps
            .iter()
            .map(|s| format!("   - {}", s))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You have access to a Perplexity web search.
Your task is to {task}.

CRITICAL: You must provide your search results AND your analysis separately to help with debugging.

Follow these steps:
1. First, search the web with the company name and {search_terms} in your search query
2. Begin your response with "{raw}" followed by the exact response you received from Perplexity
3. Then include a section titled "{analysis}" where you detail your evaluation process:
{analysis_steps}
4. Finally, after your analysis, include a blank line followed by your final determination:
   - If the search found information for the EXACT company, {found}
   - If the search found a DIFFERENT company with a similar name, return "{ambiguous}"
   - If you can't find the information with confidence, return "{unknown}"

IMPORTANT: We need to see the full raw search results to understand how you're making your determination."#,
            raw = RAW_RESULTS_MARKER,
            analysis = ANALYSIS_MARKER,
            ambiguous = NOT_EXACT_MATCH,
            unknown = UNKNOWN,
        )
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            Facet::Website.user_message("Acme", "ignored"),
            "Find the official website domain for: Acme"
        );
        assert_eq!(
            Facet::Owner.user_message("Acme", "acme.com"),
            "Who is the current owner, CEO, or main founder of Acme? Their website is acme.com."
        );
        assert!(Facet::Products.user_message("Acme", "acme.com").contains("sell or provide"));
    }

    #[test]
    fn test_system_prompt_requests_markers_and_sentinels() {
        for facet in Facet::ALL {
            let prompt = facet.system_prompt();
            assert!(prompt.contains(RAW_RESULTS_MARKER));
            assert!(prompt.contains(ANALYSIS_MARKER));
            assert!(prompt.contains(NOT_EXACT_MATCH));
            assert!(prompt.contains("\"Unknown\""));
        }
    }

    #[test]
    fn test_match_target() {
        assert_eq!(Facet::Website.match_target(), "company name");
        assert_eq!(Facet::Owner.match_target(), "company");
    }

    #[test]
    fn test_facet_specific_steps() {
        assert!(Facet::Owner.system_prompt().contains("leadership/ownership"));
        assert!(!Facet::Website.system_prompt().contains("leadership/ownership"));
        assert!(Facet::Products.system_prompt().contains("2-3 sentence"));
    }
}
