//! Search use case
//!
//! Runs one of the web search tools against the chat-completion provider.
//! Provider failures come back as readable text in place of results.

use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::use_cases::shared::complete_logged;
use scout_domain::{
    DomainError, FailureKind, Model, Query, SearchTool, describe_search_failure,
    format_search_result,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`SearchUseCase`]
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub tool: SearchTool,
    pub query: String,
    /// Requested model; only honoured by [`SearchTool::Web`]
    pub model: Option<String>,
}

impl SearchInput {
    pub fn new(tool: SearchTool, query: impl Into<String>) -> Self {
        Self {
            tool,
            query: query.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// What a search produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutput {
    /// Formatted answer, or the failure text
    pub text: String,
    /// Model the request was sent to
    pub model: Model,
    /// Whether `text` describes a failure
    pub failed: bool,
}

/// Use case for running a search tool
pub struct SearchUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SearchUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run the search. Only an empty query is an error.
    pub async fn execute(&self, input: SearchInput) -> Result<SearchOutput, DomainError> {
        let tool = input.tool;
        let text = Query::try_new(input.query.trim())?;
        let query = Query::try_new(tool.user_message(text.content()))?
            .with_system(tool.system_prompt());

        let model = tool.resolve_model(input.model.as_deref());
        if let Some(requested) = input.model.as_deref()
            && requested != model.as_str()
        {
            warn!("Model '{}' is not available for {}, using {}", requested, tool.name(), model);
        }
        info!("{} with {}: {}", tool.name(), model, input.query.trim());

        let request = CompletionRequest::from_query(model.clone(), &query);
        match complete_logged(self.gateway.as_ref(), self.conversation_logger.as_ref(), &request)
            .await
        {
            Ok(completion) => Ok(SearchOutput {
                text: format_search_result(tool, &completion.text, &completion.citations, &model),
                model,
                failed: false,
            }),
            Err(e) => {
                warn!("{} failed: {}", tool.name(), e);
                Ok(SearchOutput {
                    text: describe_search_failure(tool, failure_kind(&e), &e.to_string()),
                    model,
                    failed: true,
                })
            }
        }
    }
}

fn failure_kind(error: &GatewayError) -> FailureKind {
    match error {
        GatewayError::AuthenticationFailed(_) => FailureKind::Authentication,
        GatewayError::RateLimited(_) => FailureKind::RateLimit,
        GatewayError::Timeout => FailureKind::Timeout,
        // Provider messages without a typed cause
        GatewayError::RequestFailed(message) | GatewayError::Other(message) => {
            FailureKind::from_message(message)
        }
        GatewayError::ConnectionError(_) | GatewayError::InvalidResponse(_) => {
            FailureKind::Unclassified
        }
    }
}
