//! Console output formatter for research and search results

use colored::Colorize;
use scout_domain::{CompanyProfile, ExtractedAnswer, Facet};

const ATTEMPT_RULE: usize = 70;
const SECTION_RULE: usize = 50;
const SUMMARY_RULE: usize = 50;
const FRAME_RULE: usize = 80;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed before the sections of one attempt
    pub fn attempt_banner(facet: Facet, subject: &str, attempt: u32) -> String {
        let line = "=".repeat(ATTEMPT_RULE);
        format!(
            "\n{}\n{}\n{}\n",
            line.cyan(),
            format!("SEARCH ATTEMPT {}: {} FOR '{}'", attempt + 1, facet.title(), subject).bold(),
            line.cyan()
        )
    }

    /// Raw results, analysis and determination of one attempt
    pub fn attempt_sections(answer: &ExtractedAnswer) -> String {
        let mut output = String::new();

        if !answer.structured {
            output.push_str(&format!(
                "{}\n{}\n",
                "Response format not as expected. Showing full response:".yellow(),
                answer.determination
            ));
        }

        output.push_str(&Self::section_header("RAW PERPLEXITY SEARCH RESULTS:"));
        output.push_str(&answer.raw_results);
        output.push('\n');
        output.push_str(&Self::section_header("\nCLAUDE'S ANALYSIS:"));
        output.push_str(&answer.analysis);
        output.push('\n');
        output.push_str(&Self::section_header("\nFINAL DETERMINATION:"));
        output.push_str(&answer.determination.green().bold().to_string());
        output.push_str(&format!("\n\n{}\n", "=".repeat(ATTEMPT_RULE).cyan()));
        output
    }

    /// Line printed before a retry
    pub fn retry_notice(facet: Facet, subject: &str, attempt: u32) -> String {
        format!(
            "Attempt {}: Retrying to find exact match for {}...",
            attempt + 1,
            Self::target(facet, subject)
        )
    }

    /// Line printed when every attempt came back ambiguous
    pub fn exhausted_notice(facet: Facet, subject: &str, max_attempts: u32) -> String {
        format!(
            "Warning: Could not find exact match for {} after {} attempts.",
            Self::target(facet, subject),
            max_attempts
        )
    }

    /// Intro printed before a company lookup
    pub fn research_intro(company: &str) -> String {
        format!(
            "\nResearching information for: {}\n\n{}\n",
            company.bold(),
            "This may take a minute as Claude uses Perplexity to search for information...".dimmed()
        )
    }

    /// Final summary of a company lookup
    pub fn company_summary(profile: &CompanyProfile) -> String {
        let line = "=".repeat(SUMMARY_RULE);
        let mut output = String::new();

        if !profile.exact_match {
            output.push_str(&format!(
                "\n{} Could not find exact match for company: {}\n",
                "⚠️".yellow(),
                profile.company_name
            ));
            output.push_str("Please verify the company name or try a more specific search.\n");
        }

        output.push_str(&format!(
            "\n{}\n{}\n{}\n",
            line.cyan(),
            format!("COMPANY INFORMATION: {}", profile.company_name).bold(),
            line.cyan()
        ));

        if profile.exact_match {
            output.push_str(&format!("{} {}\n", "Website:".cyan().bold(), profile.website));
            output.push_str(&format!("{} {}\n", "Owner/CEO:".cyan().bold(), profile.owner));
            output.push_str(&format!(
                "{} {}\n",
                "Products/Services:".cyan().bold(),
                profile.products_services
            ));
        } else {
            output.push_str(&format!(
                "{} No exact match found for this company name.\n",
                "❌".red()
            ));
            output.push_str("Please verify the company name and try again.\n");
        }

        output.push_str(&format!("{}\n", line.cyan()));
        output
    }

    /// Format a profile as JSON
    pub fn format_json(profile: &CompanyProfile) -> String {
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string())
    }

    /// Centered banner for the interactive investigation
    pub fn banner(title: &str) -> String {
        let line = "=".repeat(FRAME_RULE);
        format!("{}\n{:^width$}\n{}\n", line, title.bold(), line, width = FRAME_RULE)
    }

    /// Search results framed by rules
    pub fn framed(title: &str, body: &str) -> String {
        let rule = "-".repeat(FRAME_RULE);
        format!("\n{}\n{}\n{}\n{}", title.cyan().bold(), rule, body, rule)
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(SECTION_RULE))
    }

    fn target(facet: Facet, subject: &str) -> String {
        match facet {
            Facet::Website => format!("'{}'", subject),
            Facet::Owner | Facet::Products => format!("{} of '{}'", facet.noun(), subject),
        }
    }
}
