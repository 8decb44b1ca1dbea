//! Request parameters: which model to call and how many tokens to allow.

use scout_domain::Model;

/// Model and token budget for one kind of request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub model: Model,
    pub max_tokens: Option<u32>,
}

impl RequestParams {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            max_tokens: None,
        }
    }

    /// Company research lookups (messages provider)
    pub fn research() -> Self {
        Self::new(Model::default_research()).with_max_tokens(2000)
    }

    /// Investigation conversation (messages provider)
    pub fn investigation() -> Self {
        Self::new(Model::default_investigation()).with_max_tokens(4000)
    }

    /// Web searches (chat-completion provider)
    pub fn search() -> Self {
        Self::new(Model::default_search())
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
