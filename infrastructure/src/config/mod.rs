//! Configuration file loading for company-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SCOUT_`-prefixed environment variables (`SCOUT_RESEARCH__MODE=quick`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./scout.toml` or `./.scout.toml`
//! 4. Global: `$XDG_CONFIG_HOME/company-scout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    CredentialError, FileAnthropicConfig, FileConfig, FileModelsConfig, FileOutputConfig,
    FilePerplexityConfig, FileProvidersConfig, FileResearchConfig,
};
pub use loader::ConfigLoader;
