//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod models;
mod output;
mod providers;
mod research;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{
    CredentialError, FileAnthropicConfig, FilePerplexityConfig, FileProvidersConfig,
};
pub use research::FileResearchConfig;

use scout_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Company research settings
    pub research: FileResearchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks model names, the search model, attempt and token bounds, and
    /// provider fields that must not be blank.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_research().1);
        issues.extend(self.models.parse_investigation().1);
        issues.extend(self.models.parse_search().1);

        let bounds = [
            ("research.max_attempts", u64::from(self.research.max_attempts)),
            ("providers.anthropic.max_tokens", u64::from(self.providers.anthropic.max_tokens)),
            (
                "providers.anthropic.request_timeout_secs",
                self.providers.anthropic.request_timeout_secs,
            ),
            (
                "providers.perplexity.request_timeout_secs",
                self.providers.perplexity.request_timeout_secs,
            ),
        ];
        for (field, value) in bounds {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                        value,
                    },
                    format!("{}: must be at least 1", field),
                ));
            }
        }

        let required = [
            ("providers.anthropic.api_key_env", &self.providers.anthropic.api_key_env),
            ("providers.anthropic.base_url", &self.providers.anthropic.base_url),
            ("providers.anthropic.api_version", &self.providers.anthropic.api_version),
            ("providers.perplexity.api_key_env", &self.providers.perplexity.api_key_env),
            ("providers.perplexity.base_url", &self.providers.perplexity.base_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: cannot be empty", field),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{Model, ResearchMode, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[providers.anthropic]
api_key_env = "CLAUDE_KEY"
request_timeout_secs = 30

[providers.perplexity]
base_url = "https://proxy.example"

[models]
research = "claude-3-haiku-20240307"
search = "sonar-small"

[research]
mode = "quick"
max_attempts = 5

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.anthropic.api_key_env, "CLAUDE_KEY");
        assert_eq!(config.providers.anthropic.request_timeout_secs, 30);
        assert_eq!(config.providers.perplexity.base_url, "https://proxy.example");
        assert_eq!(config.models.parse_research().0, Model::ClaudeHaiku3);
        assert_eq!(config.models.parse_search().0, Some(Model::SonarSmall));
        assert_eq!(config.research.mode, ResearchMode::Quick);
        assert_eq!(config.research.max_attempts, 5);
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.research.mode, ResearchMode::Thorough);
        assert_eq!(config.research.max_attempts, 3);
        assert_eq!(config.providers.anthropic.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.providers.perplexity.api_key_env, "PERPLEXITY_API_KEY");
        assert!(config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.research.max_attempts = 0;
        config.models.search = Some("gpt-4".to_string());
        config.models.investigation = Some(String::new());
        config.providers.perplexity.base_url = " ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
        assert!(issues.iter().any(|i| i.severity == Severity::Warning
            && matches!(i.code, ConfigIssueCode::UnsupportedSearchModel { .. })));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::OutOfRange { field, value: 0 } if field == "research.max_attempts"
        )));
    }
}
