//! Role-based model configuration from TOML (`[models]` section)

use scout_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// research = "claude-3-opus-20240229"        # Company facet lookups
/// investigation = "claude-3-haiku-20240307"  # Interactive investigation
/// search = "sonar-pro"                       # Web search tools
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for company research lookups
    pub research: Option<String>,
    /// Model for the interactive investigation
    pub investigation: Option<String>,
    /// Default model for web searches
    pub search: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: format!("models.{}", field),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            // Unknown names become Model::Custom
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    /// Parse the research model, falling back to the default
    pub fn parse_research(&self) -> (Model, Vec<ConfigIssue>) {
        let (model, issues) = Self::parse_single_model("research", self.research.as_ref());
        (model.unwrap_or_else(Model::default_research), issues)
    }

    /// Parse the investigation model, falling back to the default
    pub fn parse_investigation(&self) -> (Model, Vec<ConfigIssue>) {
        let (model, issues) =
            Self::parse_single_model("investigation", self.investigation.as_ref());
        (model.unwrap_or_else(Model::default_investigation), issues)
    }

    /// Parse the search model.
    ///
    /// A model the search endpoint does not offer is reported as a warning;
    /// the search tools fall back to the default for it.
    pub fn parse_search(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        let (model, mut issues) = Self::parse_single_model("search", self.search.as_ref());
        if let Some(model) = &model
            && !model.is_search_model()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnsupportedSearchModel {
                    value: model.to_string(),
                },
                format!(
                    "models.search: '{}' is not a search model, '{}' will be used",
                    model,
                    Model::default_search()
                ),
            ));
        }
        (model, issues)
    }
}
