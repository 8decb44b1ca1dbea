//! Company under investigation and the prompts built around it.

use serde::{Deserialize, Serialize};

/// What the user knows about the company at the start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyLead {
    pub name: String,
    pub website: String,
    pub linkedin: String,
    pub additional_info: String,
}

impl CompanyLead {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Known details other than the name, as `label: value` lines
    fn known_details(&self) -> Vec<String> {
        [
            ("Website", &self.website),
            ("LinkedIn", &self.linkedin),
            ("Additional information", &self.additional_info),
        ]
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{}: {}", label, value.trim()))
        .collect()
    }

    /// System prompt for the investigation assistant
    pub fn system_prompt(&self) -> String {
        let mut prompt = format!(
            r#"You are the SmartBroker Investigation Assistant, an expert at finding information about software companies.

You're helping investigate if {name} is a good acquisition target. The criteria are:

1. The company should be selling an actual software product, not software development services
2. The company should have 5-50 employees based in the USA or Canada
3. The company should sell boring, stable "vertical market software" that's deeply embedded in an industry
4. The company should be bootstrapped (or friends and family funded) with no Venture Capital
5. The owners should be older (50+)

When investigating criteria, follow these guidelines:
1. Suggest a specific, well-crafted search query to find the information, on its own line as "Search query: <query>"
2. Analyze the search results to extract relevant information
3. If you find the answer, clearly state it and the confidence level
4. If you don't find the answer, suggest a refined search query
5. If after multiple attempts you believe the information cannot be found, state so clearly
6. When every criterion has been addressed, say "Investigation complete"

Be efficient in your search process. Don't waste searches on information that's unlikely to be found."#,
            name = self.name
        );

        let details = self.known_details();
        if !details.is_empty() {
            prompt.push_str("\n\nKnown details about the company:\n");
            prompt.push_str(&details.join("\n"));
        }
        prompt
    }

    /// Assistant message that opens the conversation
    pub fn opening_message(&self) -> String {
        format!(
            "I'll help you investigate {} to determine if it's a good acquisition target. \
             Let's start by gathering information about the five criteria. \
             Which criterion would you like to investigate first?",
            self.name
        )
    }
}

/// User message feeding search results back to the model
pub fn search_results_message(query: &str, results: &str) -> String {
    format!(
        "Here are the search results for '{}':\n\n{}\n\nWhat did you learn about the question from these results?",
        query, results
    )
}

/// User message selecting the next criterion
pub fn criterion_message(criterion: &str) -> String {
    format!("Let's investigate: {}", criterion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_company() {
        let lead = CompanyLead::new("Acme Dental Software");
        let prompt = lead.system_prompt();
        assert!(prompt.contains("investigate if Acme Dental Software is a good acquisition target"));
        assert!(!prompt.contains("Known details"));
    }

    #[test]
    fn test_system_prompt_includes_known_details() {
        let lead = CompanyLead {
            name: "Acme".into(),
            website: "acme.com".into(),
            linkedin: "".into(),
            additional_info: " family owned ".into(),
        };
        let prompt = lead.system_prompt();
        assert!(prompt.contains("Website: acme.com"));
        assert!(prompt.contains("Additional information: family owned"));
        assert!(!prompt.contains("LinkedIn:"));
    }

    #[test]
    fn test_follow_up_messages() {
        assert_eq!(
            search_results_message("acme ceo", "Jane Doe"),
            "Here are the search results for 'acme ceo':\n\nJane Doe\n\nWhat did you learn about the question from these results?"
        );
        assert_eq!(criterion_message("2. Size?"), "Let's investigate: 2. Size?");
    }
}
