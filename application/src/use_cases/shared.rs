//! Shared utilities for use cases.
//!
//! Contains the transcript-logging request helper used by every use case
//! that talks to a gateway, and the scripted gateway used by their tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway, StreamTranscript};
use scout_domain::Completion;
use tracing::debug;

/// Send a request, recording the request and its outcome in the transcript.
pub(crate) async fn complete_logged(
    gateway: &dyn LlmGateway,
    logger: &dyn ConversationLogger,
    request: &CompletionRequest,
) -> Result<Completion, GatewayError> {
    let provider = gateway.provider();
    debug!(
        "Sending {} message(s) to {} ({})",
        request.messages.len(),
        provider,
        request.model
    );
    logger.log(ConversationEvent::request(provider, request));

    match gateway.complete(request).await {
        Ok(completion) => {
            logger.log(ConversationEvent::response(provider, &completion));
            Ok(completion)
        }
        Err(e) => {
            logger.log(ConversationEvent::failure(provider, &e.to_string()));
            Err(e)
        }
    }
}

/// Streaming counterpart of [`complete_logged`]; the assembled text is
/// logged as the response.
pub(crate) async fn stream_logged(
    gateway: &dyn LlmGateway,
    logger: &dyn ConversationLogger,
    request: &CompletionRequest,
) -> Result<StreamTranscript, GatewayError> {
    let provider = gateway.provider();
    debug!("Streaming from {} ({})", provider, request.model);
    logger.log(ConversationEvent::request(provider, request));

    let result = match gateway.complete_streaming(request).await {
        Ok(handle) => handle.collect().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(transcript) => {
            let completion = Completion::from_text(transcript.text.clone());
            logger.log(ConversationEvent::response(provider, &completion));
            Ok(transcript)
        }
        Err(e) => {
            logger.log(ConversationEvent::failure(provider, &e.to_string()));
            Err(e)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted gateway shared by the use-case tests.

    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Gateway that replays scripted results in order and records requests
    pub(crate) struct ScriptedGateway {
        name: &'static str,
        replies: Mutex<VecDeque<Result<Completion, GatewayError>>>,
        pub(crate) requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedGateway {
        pub(crate) fn new(name: &'static str) -> Self {
            Self {
                name,
                replies: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn reply(self, text: &str) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(Completion::from_text(text)));
            self
        }

        pub(crate) fn reply_with(self, completion: Completion) -> Self {
            self.replies.lock().unwrap().push_back(Ok(completion));
            self
        }

        pub(crate) fn fail(self, error: GatewayError) -> Self {
            self.replies.lock().unwrap().push_back(Err(error));
            self
        }

        pub(crate) fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub(crate) fn request(&self, index: usize) -> CompletionRequest {
            self.requests.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn provider(&self) -> &str {
            self.name
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
        }
    }

    /// Logger that keeps event types
    #[derive(Default)]
    pub(crate) struct RecordingLogger {
        pub(crate) events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }
}
