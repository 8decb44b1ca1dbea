//! Resolve Facet use case
//!
//! Looks up one facet of a company (website, owner, products) and keeps
//! asking while the model reports a similarly named but different company.

use crate::config::RequestParams;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::ports::progress::ResearchProgress;
use crate::use_cases::shared::complete_logged;
use scout_domain::{
    Determination, DomainError, ExtractedAnswer, Facet, Query, RetryDecision, RetryPolicy,
    extract_answer,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveFacetError {
    #[error("Invalid research query: {0}")]
    InvalidQuery(#[from] DomainError),
}

/// Result of one facet lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOutcome {
    /// Final determination; never [`Determination::AmbiguousMatch`]
    pub determination: Determination,
    /// Number of requests issued
    pub attempts: u32,
    /// Sections extracted from every answered attempt
    pub answers: Vec<ExtractedAnswer>,
}

/// Use case for resolving a single company facet
pub struct ResolveFacetUseCase {
    gateway: Arc<dyn LlmGateway>,
    request: RequestParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ResolveFacetUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, request: RequestParams) -> Self {
        Self {
            gateway,
            request,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Resolve `facet` for `company`.
    ///
    /// `website` fills the owner and products prompts. A failed request ends
    /// the lookup with [`Determination::Unknown`]; the failure is reported to
    /// `progress`, never returned.
    pub async fn resolve(
        &self,
        company: &str,
        facet: Facet,
        website: &str,
        policy: RetryPolicy,
        progress: &dyn ResearchProgress,
    ) -> Result<FacetOutcome, ResolveFacetError> {
        let base = Query::try_new(facet.user_message(company, website))?
            .with_system(facet.system_prompt());
        let max_attempts = policy.max_attempts();

        info!("Resolving {} for '{}'", facet.noun(), company);
        progress.on_facet_start(facet, company);

        let mut answers = Vec::new();
        let mut attempt = 0;

        let determination = loop {
            progress.on_attempt_start(facet, company, attempt, max_attempts);

            let query = base
                .clone()
                .with_suffix(policy.clarification(facet.match_target(), company, attempt).as_deref());
            let mut request = CompletionRequest::from_query(self.request.model.clone(), &query);
            if let Some(max_tokens) = self.request.max_tokens {
                request = request.with_max_tokens(max_tokens);
            }

            let completion = match complete_logged(
                self.gateway.as_ref(),
                self.conversation_logger.as_ref(),
                &request,
            )
            .await
            {
                Ok(completion) => completion,
                Err(e) => {
                    warn!("{} lookup for '{}' failed: {}", facet.noun(), company, e);
                    progress.on_request_failed(facet, company, attempt, &format!("Error: {}", e));
                    break Determination::Unknown;
                }
            };

            let answer = extract_answer(&completion.text);
            if !answer.structured {
                debug!("Attempt {} returned an unstructured answer", attempt + 1);
            }
            progress.on_attempt_parsed(facet, company, attempt, &answer);
            let verdict = answer.verdict();
            answers.push(answer);

            match policy.next_step(&verdict, attempt) {
                RetryDecision::Accept(determination) => break determination,
                RetryDecision::Retry { next_attempt } => {
                    debug!("Ambiguous match on attempt {}, retrying", attempt + 1);
                    attempt = next_attempt;
                }
                RetryDecision::GiveUp => {
                    warn!(
                        "No exact match for {} of '{}' after {} attempts",
                        facet.noun(),
                        company,
                        max_attempts
                    );
                    progress.on_attempts_exhausted(facet, company, max_attempts);
                    break Determination::Unknown;
                }
            }
        };

        progress.on_facet_complete(facet, &determination);
        Ok(FacetOutcome {
            determination,
            attempts: attempt + 1,
            answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::progress::NoResearchProgress;
    use crate::use_cases::shared::testing::ScriptedGateway;
    use std::sync::Mutex;

    fn structured(determination: &str) -> String {
        format!(
            "RAW_SEARCH_RESULTS:\nsome results\nCLAUDE_ANALYSIS:\nreasoning\n\n{}",
            determination
        )
    }

    fn use_case(gateway: &Arc<ScriptedGateway>) -> ResolveFacetUseCase {
        ResolveFacetUseCase::new(gateway.clone(), RequestParams::research())
    }

    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<String>>,
    }

    impl ResearchProgress for RecordingProgress {
        fn on_attempt_start(&self, _facet: Facet, _subject: &str, attempt: u32, max: u32) {
            self.calls.lock().unwrap().push(format!("start {}/{}", attempt, max));
        }

        fn on_attempt_parsed(&self, _facet: Facet, _subject: &str, _attempt: u32, answer: &ExtractedAnswer) {
            self.calls.lock().unwrap().push(format!("parsed {}", answer.determination));
        }

        fn on_request_failed(&self, _facet: Facet, _subject: &str, _attempt: u32, message: &str) {
            self.calls.lock().unwrap().push(format!("failed {}", message));
        }

        fn on_attempts_exhausted(&self, _facet: Facet, _subject: &str, max: u32) {
            self.calls.lock().unwrap().push(format!("exhausted {}", max));
        }
    }

    #[tokio::test]
    async fn test_first_concrete_answer_is_accepted() {
        let gateway = Arc::new(ScriptedGateway::new("anthropic").reply(&structured("acme.com")));

        let outcome = use_case(&gateway)
            .resolve("Acme", Facet::Website, "", RetryPolicy::default(), &NoResearchProgress)
            .await
            .unwrap();

        assert_eq!(outcome.determination, Determination::Concrete("acme.com".into()));
        assert_eq!(outcome.attempts, 1);
        assert_eq!(gateway.request_count(), 1);

        let request = gateway.request(0);
        assert_eq!(request.max_tokens, Some(2000));
        assert_eq!(request.messages[0].content, "Find the official website domain for: Acme");
        assert!(request.system.unwrap().contains("RAW_SEARCH_RESULTS:"));
    }

    #[tokio::test]
    async fn test_ambiguous_then_concrete_issues_one_more_request() {
        let gateway = Arc::new(
            ScriptedGateway::new("anthropic")
                .reply(&structured("NOT_EXACT_MATCH"))
                .reply(&structured("acme.com")),
        );

        let outcome = use_case(&gateway)
            .resolve("Acme", Facet::Website, "", RetryPolicy::default(), &NoResearchProgress)
            .await
            .unwrap();

        assert_eq!(outcome.determination, Determination::Concrete("acme.com".into()));
        assert_eq!(outcome.attempts, 2);
        assert_eq!(gateway.request_count(), 2);
        assert!(
            gateway.request(1).messages[0]
                .content
                .ends_with("Please search specifically for the EXACT company name 'Acme' and verify it matches exactly.")
        );
    }

    #[tokio::test]
    async fn test_three_ambiguous_answers_resolve_to_unknown() {
        let gateway = Arc::new(
            ScriptedGateway::new("anthropic")
                .reply(&structured("NOT_EXACT_MATCH"))
                .reply(&structured("NOT_EXACT_MATCH"))
                .reply(&structured("NOT_EXACT_MATCH")),
        );
        let progress = RecordingProgress::default();

        let outcome = use_case(&gateway)
            .resolve("Acme", Facet::Owner, "acme.com", RetryPolicy::default(), &progress)
            .await
            .unwrap();

        assert_eq!(outcome.determination, Determination::Unknown);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.answers.len(), 3);
        assert_eq!(gateway.request_count(), 3);
        assert!(
            gateway.request(1).messages[0]
                .content
                .ends_with("Please search specifically for the EXACT company 'Acme' and verify it matches exactly.")
        );
        assert!(gateway.request(2).messages[0].content.contains("This is your last attempt."));

        let calls = progress.calls.lock().unwrap();
        assert_eq!(calls.first().map(String::as_str), Some("start 0/3"));
        assert_eq!(calls.last().map(String::as_str), Some("exhausted 3"));
    }

    #[tokio::test]
    async fn test_single_shot_policy_never_retries() {
        let gateway = Arc::new(ScriptedGateway::new("anthropic").reply(&structured("NOT_EXACT_MATCH")));

        let outcome = use_case(&gateway)
            .resolve("Acme", Facet::Products, "acme.com", RetryPolicy::single_shot(), &NoResearchProgress)
            .await
            .unwrap();

        assert_eq!(outcome.determination, Determination::Unknown);
        assert_eq!(gateway.request_count(), 1);
    }

    #[tokio::test]
    async fn test_unstructured_answer_is_the_determination() {
        let gateway = Arc::new(ScriptedGateway::new("anthropic").reply("  acme.com \n"));

        let outcome = use_case(&gateway)
            .resolve("Acme", Facet::Website, "", RetryPolicy::default(), &NoResearchProgress)
            .await
            .unwrap();

        assert_eq!(outcome.determination, Determination::Concrete("acme.com".into()));
        assert!(!outcome.answers[0].structured);
    }

    #[tokio::test]
    async fn test_gateway_failure_resolves_to_unknown() {
        let gateway = Arc::new(
            ScriptedGateway::new("anthropic")
                .fail(GatewayError::AuthenticationFailed("bad key".into())),
        );
        let progress = RecordingProgress::default();

        let outcome = use_case(&gateway)
            .resolve("Acme", Facet::Website, "", RetryPolicy::default(), &progress)
            .await
            .unwrap();

        assert_eq!(outcome.determination, Determination::Unknown);
        assert_eq!(gateway.request_count(), 1);
        assert!(outcome.answers.is_empty());
        let calls = progress.calls.lock().unwrap();
        assert_eq!(calls[1], "failed Error: Authentication failed: bad key");
    }
}
