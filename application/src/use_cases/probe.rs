//! Probe use case
//!
//! Sends one fixed conversation to the chat-completion provider, once
//! without and once with streaming, and saves what came back for inspection.

use crate::ports::artifact_store::{ArtifactError, ArtifactStore};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::use_cases::shared::{complete_logged, stream_logged};
use scout_domain::{Message, Model};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const RESPONSE_ARTIFACT: &str = "perplexity_response.txt";
pub const STREAMING_ARTIFACT: &str = "perplexity_streaming.txt";
pub const ERROR_ARTIFACT: &str = "perplexity_error.txt";

pub const DEFAULT_QUESTION: &str = "How many stars are in the universe?";

const PROBE_SYSTEM_PROMPT: &str = "You are an artificial intelligence assistant and you need to \
    engage in a helpful, detailed, polite conversation with a user.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProbeError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// What the probe wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Locations of the response dumps, in the order written
    pub saved: Vec<String>,
    /// Provider failure and where its report was saved
    pub failure: Option<(GatewayError, String)>,
}

/// Use case for probing the chat-completion API
pub struct ProbeUseCase {
    gateway: Arc<dyn LlmGateway>,
    store: Arc<dyn ArtifactStore>,
    model: Model,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ProbeUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            gateway,
            store,
            model: Model::default_search(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(&self, question: &str) -> Result<ProbeReport, ProbeError> {
        let request = CompletionRequest::new(self.model.clone(), vec![Message::user(question)])
            .with_system(PROBE_SYSTEM_PROMPT);
        let mut report = ProbeReport::default();

        match self.run(&request, &mut report).await {
            Ok(()) => {}
            Err(Failure::Gateway(e)) => {
                warn!("Probe failed: {}", e);
                let location = self.store.save(ERROR_ARTIFACT, &format!("Error: {}", e))?;
                report.failure = Some((e, location));
            }
            Err(Failure::Artifact(e)) => return Err(e.into()),
        }
        Ok(report)
    }

    async fn run(
        &self,
        request: &CompletionRequest,
        report: &mut ProbeReport,
    ) -> Result<(), Failure> {
        let completion = complete_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            request,
        )
        .await?;
        let dump = format!("{:#?}\n\nContent: {}", completion, completion.text);
        report.saved.push(self.store.save(RESPONSE_ARTIFACT, &dump)?);
        info!("Non-streaming response saved");

        let transcript = stream_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            request,
        )
        .await?;

        let mut dump = String::from("Streaming response:\n");
        for frame in &transcript.frames {
            dump.push_str(frame);
            dump.push('\n');
        }
        dump.push_str("\n\nFull content from streaming:\n");
        dump.push_str(&transcript.text);
        report.saved.push(self.store.save(STREAMING_ARTIFACT, &dump)?);
        info!("Streaming response saved ({} frames)", transcript.frames.len());
        Ok(())
    }
}

/// Why a probe run stopped early
enum Failure {
    Gateway(GatewayError),
    Artifact(ArtifactError),
}

impl From<GatewayError> for Failure {
    fn from(e: GatewayError) -> Self {
        Failure::Gateway(e)
    }
}

impl From<ArtifactError> for Failure {
    fn from(e: ArtifactError) -> Self {
        Failure::Artifact(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::testing::{RecordingLogger, ScriptedGateway};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        files: Mutex<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn get(&self, name: &str) -> Option<String> {
            self.files.lock().unwrap().get(name).cloned()
        }
    }

    impl ArtifactStore for MemoryStore {
        fn save(&self, name: &str, contents: &str) -> Result<String, ArtifactError> {
            self.files
                .lock()
                .unwrap()
                .insert(name.to_string(), contents.to_string());
            Ok(format!("mem/{}", name))
        }
    }

    #[tokio::test]
    async fn test_writes_both_dumps() {
        // The default streaming path re-issues `complete`, so script two replies
        let gateway = Arc::new(
            ScriptedGateway::new("perplexity")
                .reply("About 10^24 stars.")
                .reply("About 10^24 stars."),
        );
        let store = Arc::new(MemoryStore::default());

        let report = ProbeUseCase::new(gateway.clone(), store.clone())
            .execute(DEFAULT_QUESTION)
            .await
            .unwrap();

        assert_eq!(report.saved, vec!["mem/perplexity_response.txt", "mem/perplexity_streaming.txt"]);
        assert!(report.failure.is_none());

        let response = store.get(RESPONSE_ARTIFACT).unwrap();
        assert!(response.ends_with("\n\nContent: About 10^24 stars."));
        let streaming = store.get(STREAMING_ARTIFACT).unwrap();
        assert!(streaming.starts_with("Streaming response:\n"));
        assert!(streaming.ends_with("Full content from streaming:\nAbout 10^24 stars."));

        let request = gateway.request(0);
        assert_eq!(request.model, Model::SonarPro);
        assert_eq!(request.messages[0].content, DEFAULT_QUESTION);
        assert!(request.system.unwrap().starts_with("You are an artificial intelligence assistant"));
    }

    #[tokio::test]
    async fn test_failure_writes_error_report() {
        let gateway = Arc::new(
            ScriptedGateway::new("perplexity").fail(GatewayError::AuthenticationFailed("401".into())),
        );
        let store = Arc::new(MemoryStore::default());

        let report = ProbeUseCase::new(gateway, store.clone())
            .execute("q")
            .await
            .unwrap();

        assert!(report.saved.is_empty());
        let (error, location) = report.failure.unwrap();
        assert_eq!(error, GatewayError::AuthenticationFailed("401".into()));
        assert_eq!(location, "mem/perplexity_error.txt");
        assert_eq!(
            store.get(ERROR_ARTIFACT).unwrap(),
            "Error: Authentication failed: 401"
        );
        assert!(store.get(RESPONSE_ARTIFACT).is_none());
    }

    #[tokio::test]
    async fn test_transcript_pairs_both_requests() {
        let gateway = Arc::new(ScriptedGateway::new("perplexity").reply("a").reply("b"));
        let logger = Arc::new(RecordingLogger::default());

        ProbeUseCase::new(gateway, Arc::new(MemoryStore::default()))
            .with_conversation_logger(logger.clone())
            .execute("q")
            .await
            .unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["llm_request", "llm_response", "llm_request", "llm_response"]
        );
    }

    #[tokio::test]
    async fn test_transcript_records_streaming_failure() {
        let gateway = Arc::new(
            ScriptedGateway::new("perplexity")
                .reply("a")
                .fail(GatewayError::RequestFailed("stream reset".into())),
        );
        let logger = Arc::new(RecordingLogger::default());
        let store = Arc::new(MemoryStore::default());

        let report = ProbeUseCase::new(gateway, store.clone())
            .with_conversation_logger(logger.clone())
            .execute("q")
            .await
            .unwrap();

        assert_eq!(report.saved, vec!["mem/perplexity_response.txt"]);
        assert!(store.get(ERROR_ARTIFACT).is_some());
        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["llm_request", "llm_response", "llm_request", "llm_error"]
        );
    }
}
