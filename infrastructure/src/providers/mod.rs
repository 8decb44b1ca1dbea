//! HTTP adapters for the two text-generation providers.
//!
//! - [`AnthropicGateway`]: messages API, used for research and investigation
//! - [`PerplexityGateway`]: chat-completions API with web search, used for
//!   search tools and the probe

pub mod anthropic;
pub mod error;
pub mod perplexity;

pub use anthropic::{AnthropicConfig, AnthropicGateway};
pub use error::ProviderError;
pub use perplexity::{PerplexityConfig, PerplexityGateway};
