//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation
//! providers. Both the chat-completion provider and the messages provider
//! sit behind the same trait; adapters live in the infrastructure layer.

use async_trait::async_trait;
use scout_domain::{Completion, Message, Model, Query, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One request to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system: Option<String>,
    pub messages: Vec<Message>,
    /// Token budget; providers that require one fall back to their default
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<Message>) -> Self {
        Self {
            model,
            system: None,
            messages,
            max_tokens: None,
        }
    }

    /// Single-turn request built from a query
    pub fn from_query(model: Model, query: &Query) -> Self {
        Self {
            model,
            system: query.system().map(str::to_string),
            messages: vec![Message::user(query.content())],
            max_tokens: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Gateway for LLM communication
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Provider name used in logs and transcripts
    fn provider(&self) -> &str;

    /// Send a request and wait for the full completion
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;

    /// Send a request and receive the completion as a stream.
    ///
    /// Default implementation calls `complete()` and wraps the result in a
    /// single `Completed` event.
    async fn complete_streaming(
        &self,
        request: &CompletionRequest,
    ) -> Result<StreamHandle, GatewayError> {
        let completion = self.complete(request).await?;
        let (tx, rx) = mpsc::channel(1);
        // The receiver may already be gone; nothing to do then
        let _ = tx.send(StreamEvent::Completed(completion.text)).await;
        Ok(StreamHandle::new(rx))
    }
}

/// Handle for receiving streaming events from a provider.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

/// Everything received over one stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamTranscript {
    /// Transport frames in arrival order
    pub frames: Vec<String>,
    /// Concatenated completion text
    pub text: String,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream, keeping the raw frames alongside the text.
    pub async fn collect(mut self) -> Result<StreamTranscript, GatewayError> {
        let mut transcript = StreamTranscript::default();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Raw(frame) => transcript.frames.push(frame),
                StreamEvent::Delta(chunk) => transcript.text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if transcript.text.is_empty() {
                        transcript.text = text;
                    }
                    return Ok(transcript);
                }
                StreamEvent::Error(e) => return Err(GatewayError::RequestFailed(e)),
            }
        }
        // Channel closed without Completed: return what arrived
        Ok(transcript)
    }
}
