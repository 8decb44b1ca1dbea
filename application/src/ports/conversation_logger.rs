//! Port for structured transcript logging.
//!
//! Records every request sent to a provider and every answer received, as
//! machine-readable events. This is separate from `tracing`: tracing carries
//! diagnostics, the transcript carries the full prompts and responses.

use crate::ports::llm_gateway::CompletionRequest;
use scout_domain::Completion;
use serde_json::{Value, json};

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "llm_request", "llm_response").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn request(provider: &str, request: &CompletionRequest) -> Self {
        Self::new(
            "llm_request",
            json!({
                "provider": provider,
                "model": request.model.as_str(),
                "system": request.system,
                "messages": request.messages,
                "max_tokens": request.max_tokens,
            }),
        )
    }

    pub fn response(provider: &str, completion: &Completion) -> Self {
        Self::new(
            "llm_response",
            json!({
                "provider": provider,
                "text": completion.text,
                "citations": completion.citations,
            }),
        )
    }

    pub fn failure(provider: &str, error: &str) -> Self {
        Self::new(
            "llm_error",
            json!({
                "provider": provider,
                "error": error,
            }),
        )
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; write failures are swallowed by
/// the implementation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
