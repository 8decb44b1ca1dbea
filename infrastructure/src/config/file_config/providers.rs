//! Provider configuration from TOML (`[providers]` section)

use crate::providers::{AnthropicConfig, PerplexityConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// A required API key is not configured anywhere
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{env_var} not found in environment variables.\n\
     Please create a .env file with your API key or set it in your environment."
)]
pub struct CredentialError {
    pub env_var: String,
}

/// Key from the config file, else from the named environment variable.
fn resolve_key(
    api_key: Option<&String>,
    env_var: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, CredentialError> {
    api_key
        .filter(|key| !key.trim().is_empty())
        .cloned()
        .or_else(|| lookup(env_var).filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| CredentialError {
            env_var: env_var.to_string(),
        })
}

fn from_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Anthropic messages API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Token budget when a request does not set one.
    pub max_tokens: u32,
    pub request_timeout_secs: u64,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            max_tokens: 4000,
            request_timeout_secs: 120,
        }
    }
}

impl FileAnthropicConfig {
    /// Resolve into adapter configuration, reading the key from the environment.
    pub fn resolve(&self) -> Result<AnthropicConfig, CredentialError> {
        self.resolve_with(from_env)
    }

    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<AnthropicConfig, CredentialError> {
        Ok(AnthropicConfig {
            api_key: resolve_key(self.api_key.as_ref(), &self.api_key_env, lookup)?,
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            max_tokens: self.max_tokens,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}

/// Perplexity chat-completions API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePerplexityConfig {
    /// Environment variable name for the API key (default: "PERPLEXITY_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Perplexity API.
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for FilePerplexityConfig {
    fn default() -> Self {
        Self {
            api_key_env: "PERPLEXITY_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.perplexity.ai".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl FilePerplexityConfig {
    /// Resolve into adapter configuration, reading the key from the environment.
    pub fn resolve(&self) -> Result<PerplexityConfig, CredentialError> {
        self.resolve_with(from_env)
    }

    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<PerplexityConfig, CredentialError> {
        Ok(PerplexityConfig {
            api_key: resolve_key(self.api_key.as_ref(), &self.api_key_env, lookup)?,
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// Perplexity API settings.
    pub perplexity: FilePerplexityConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_key_from_environment() {
        let config = FileAnthropicConfig::default();
        let resolved = config
            .resolve_with(|name| (name == "ANTHROPIC_API_KEY").then(|| "sk-test".to_string()))
            .unwrap();
        assert_eq!(resolved.api_key, "sk-test");
        assert_eq!(resolved.api_version, "2023-06-01");
        assert_eq!(resolved.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_file_key_wins_over_environment() {
        let config = FilePerplexityConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        let resolved = config
            .resolve_with(|_| Some("from-env".to_string()))
            .unwrap();
        assert_eq!(resolved.api_key, "from-file");
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = FilePerplexityConfig::default().resolve_with(no_env).unwrap_err();
        assert_eq!(err.env_var, "PERPLEXITY_API_KEY");
        assert!(err.to_string().starts_with("PERPLEXITY_API_KEY not found in environment variables."));
        assert!(err.to_string().contains(".env file"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = FileAnthropicConfig {
            api_key: Some("  ".to_string()),
            api_key_env: "SCOUT_TEST_KEY".to_string(),
            ..Default::default()
        };
        let err = config.resolve_with(|_| Some(String::new())).unwrap_err();
        assert_eq!(err.env_var, "SCOUT_TEST_KEY");
    }

    #[test]
    fn test_providers_deserialize() {
        let toml_str = r#"
[anthropic]
api_key_env = "MY_CLAUDE_KEY"
max_tokens = 2048

[perplexity]
base_url = "http://localhost:9999"
"#;
        let config: FileProvidersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.anthropic.api_key_env, "MY_CLAUDE_KEY");
        assert_eq!(config.anthropic.max_tokens, 2048);
        assert_eq!(config.anthropic.base_url, "https://api.anthropic.com");
        assert_eq!(config.perplexity.base_url, "http://localhost:9999");
    }
}
