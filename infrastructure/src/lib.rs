//! Infrastructure layer for company-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, CredentialError, FileAnthropicConfig, FileConfig, FileModelsConfig,
    FileOutputConfig, FilePerplexityConfig, FileProvidersConfig, FileResearchConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{
    AnthropicConfig, AnthropicGateway, PerplexityConfig, PerplexityGateway, ProviderError,
};
pub use storage::{FsArtifactStore, ProfileFileError, write_profile};
