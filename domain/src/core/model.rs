//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models served by the two upstream providers (Value Object)
///
/// Anthropic models answer research and investigation prompts; Perplexity
/// `sonar` models run the web searches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Anthropic models
    ClaudeOpus3,
    ClaudeHaiku3,
    ClaudeSonnet35,
    // Perplexity models
    SonarPro,
    SonarSmall,
    SonarMedium,
    CodeLlama70b,
    Mistral7b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeOpus3 => "claude-3-opus-20240229",
            Model::ClaudeHaiku3 => "claude-3-haiku-20240307",
            Model::ClaudeSonnet35 => "claude-3-5-sonnet-20241022",
            Model::SonarPro => "sonar-pro",
            Model::SonarSmall => "sonar-small",
            Model::SonarMedium => "sonar-medium",
            Model::CodeLlama70b => "codellama-70b",
            Model::Mistral7b => "mistral-7b",
            Model::Custom(s) => s,
        }
    }

    /// Model used for company research lookups
    pub fn default_research() -> Model {
        Model::ClaudeOpus3
    }

    /// Model used for the interactive investigation conversation
    pub fn default_investigation() -> Model {
        Model::ClaudeHaiku3
    }

    /// Model used for web searches
    pub fn default_search() -> Model {
        Model::SonarPro
    }

    /// Models accepted by the web search tool
    pub fn search_models() -> Vec<Model> {
        vec![
            Model::SonarPro,
            Model::SonarSmall,
            Model::SonarMedium,
            Model::CodeLlama70b,
            Model::Mistral7b,
        ]
    }

    /// Check if this is an Anthropic model
    pub fn is_anthropic(&self) -> bool {
        matches!(
            self,
            Model::ClaudeOpus3 | Model::ClaudeHaiku3 | Model::ClaudeSonnet35
        )
    }

    /// Check if this model is accepted by the web search tool
    pub fn is_search_model(&self) -> bool {
        matches!(
            self,
            Model::SonarPro
                | Model::SonarSmall
                | Model::SonarMedium
                | Model::CodeLlama70b
                | Model::Mistral7b
        )
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "claude-3-opus-20240229" => Model::ClaudeOpus3,
            "claude-3-haiku-20240307" => Model::ClaudeHaiku3,
            "claude-3-5-sonnet-20241022" => Model::ClaudeSonnet35,
            "sonar-pro" => Model::SonarPro,
            "sonar-small" => Model::SonarSmall,
            "sonar-medium" => Model::SonarMedium,
            "codellama-70b" => Model::CodeLlama70b,
            "mistral-7b" => Model::Mistral7b,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_models_are_known() {
        for model in Model::search_models() {
            let parsed = Model::from(model.as_str());
            assert_eq!(model, parsed);
            assert!(parsed.is_search_model());
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "claude-next".parse().unwrap();
        assert_eq!(model, Model::Custom("claude-next".to_string()));
        assert_eq!(model.to_string(), "claude-next");
        assert!(!model.is_search_model());
    }

    #[test]
    fn test_defaults_per_role() {
        assert!(Model::default_research().is_anthropic());
        assert!(Model::default_investigation().is_anthropic());
        assert!(Model::default_search().is_search_model());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::SonarPro).unwrap();
        assert_eq!(json, "\"sonar-pro\"");
        let model: Model = serde_json::from_str("\"claude-3-haiku-20240307\"").unwrap();
        assert_eq!(model, Model::ClaudeHaiku3);
    }
}
