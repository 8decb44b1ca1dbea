//! Investigate use case
//!
//! Interactive acquisition-target investigation. The user converses with the
//! messages provider, which proposes web searches; approved searches run
//! against the chat-completion provider and their results are fed back.
//!
//! Loop control reads phrases out of the assistant's prose through a
//! [`SignalClassifier`]. Those signals are heuristic: a paraphrased reply can
//! skip a search or a criterion menu, and the user can always continue typing.

use crate::config::RequestParams;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::investigator_console::{ConsoleError, InvestigatorConsole};
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::use_cases::shared::complete_logged;
use scout_domain::investigation::criteria::{CRITERIA, CriterionChoice, menu_len, parse_choice};
use scout_domain::investigation::{criterion_message, search_results_message};
use scout_domain::{
    CompanyLead, Conversation, Criterion, DomainError, KeywordSignalClassifier, Message,
    SignalClassifier, preview,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Characters of a reply kept in debug logs
const REPLY_PREVIEW_CHARS: usize = 120;

/// Stands in for an assistant reply when the request fails
pub const NO_REPLY: &str = "Error: Could not get a response from Claude.";

/// Stands in for search results when the search fails
pub const NO_SEARCH_RESULTS: &str = "Error: Could not get search results.";

#[derive(Error, Debug)]
pub enum InvestigateError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

/// Why the investigation loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestigationEnd {
    /// The assistant declared the investigation complete
    Completed,
    /// The user entered an empty line, `quit` or `exit`
    UserQuit,
    /// Input closed (EOF or interrupt)
    InputClosed,
}

/// Summary of a finished investigation
#[derive(Debug, Clone)]
pub struct InvestigationSummary {
    pub lead: CompanyLead,
    pub end: InvestigationEnd,
    /// Searches run during the session
    pub searches: usize,
    /// Messages exchanged with the assistant
    pub messages: usize,
}

/// Use case for the interactive investigation
pub struct InvestigateUseCase {
    chat: Arc<dyn LlmGateway>,
    search: Arc<dyn LlmGateway>,
    classifier: Arc<dyn SignalClassifier>,
    chat_params: RequestParams,
    search_params: RequestParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl InvestigateUseCase {
    pub fn new(chat: Arc<dyn LlmGateway>, search: Arc<dyn LlmGateway>) -> Self {
        Self {
            chat,
            search,
            classifier: Arc::new(KeywordSignalClassifier),
            chat_params: RequestParams::investigation(),
            search_params: RequestParams::search(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_chat_params(mut self, params: RequestParams) -> Self {
        self.chat_params = params;
        self
    }

    pub fn with_search_params(mut self, params: RequestParams) -> Self {
        self.search_params = params;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Collect the lead, then run the conversation until it ends.
    pub async fn execute(
        &self,
        console: &dyn InvestigatorConsole,
    ) -> Result<InvestigationSummary, InvestigateError> {
        let lead = match self.collect_lead(console).await {
            Ok(lead) => lead,
            Err(ConsoleError::Closed) => {
                return Ok(InvestigationSummary {
                    lead: CompanyLead::default(),
                    end: InvestigationEnd::InputClosed,
                    searches: 0,
                    messages: 0,
                });
            }
            Err(e) => return Err(e.into()),
        };
        self.investigate(lead, console).await
    }

    /// Prompt for the company name and optional details.
    pub async fn collect_lead(
        &self,
        console: &dyn InvestigatorConsole,
    ) -> Result<CompanyLead, ConsoleError> {
        console.reset();
        console.show("Welcome to the SmartBroker Investigation Tool!");
        console.show("\nPlease provide information about the company you want to investigate.");
        console.show("The more information you provide, the better the results will be.\n");

        let name = loop {
            let name = console.read_line("Company Name: ").await?;
            if !name.trim().is_empty() {
                break name.trim().to_string();
            }
            console.show("A company name is required.");
        };

        Ok(CompanyLead {
            name,
            website: console.read_line("Website Domain (optional): ").await?,
            linkedin: console.read_line("LinkedIn URL (optional): ").await?,
            additional_info: console
                .read_line("Any Additional Information (optional): ")
                .await?,
        })
    }

    /// Run the conversation for an already collected lead.
    pub async fn investigate(
        &self,
        lead: CompanyLead,
        console: &dyn InvestigatorConsole,
    ) -> Result<InvestigationSummary, InvestigateError> {
        info!("Starting investigation for '{}'", lead.name);
        console.reset();
        console.show(&format!("Starting investigation for: {}", lead.name));
        console.show(
            "\nInvestigation process: For each criterion, we'll search the web and analyze the results.",
        );
        console.show("You can approve search queries or modify them as needed.\n");
        // Shown only: the conversation sent to the provider starts with a user turn
        console.show_reply(&lead.opening_message());

        let system = lead.system_prompt();
        let mut conversation = Conversation::new();
        let mut searches = 0;

        let end = match self
            .converse(&system, &mut conversation, &mut searches, console)
            .await
        {
            Ok(end) => end,
            Err(ConsoleError::Closed) => InvestigationEnd::InputClosed,
            Err(e) => return Err(e.into()),
        };

        info!(
            "Investigation ended ({:?}) after {} search(es)",
            end, searches
        );
        Ok(InvestigationSummary {
            lead,
            end,
            searches,
            messages: conversation.len(),
        })
    }

    async fn converse(
        &self,
        system: &str,
        conversation: &mut Conversation,
        searches: &mut usize,
        console: &dyn InvestigatorConsole,
    ) -> Result<InvestigationEnd, ConsoleError> {
        loop {
            let input = console.read_line("> ").await?;
            let input = input.trim();
            if input.is_empty() || input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
                return Ok(InvestigationEnd::UserQuit);
            }

            conversation.push_user(input);
            let mut reply = self.ask(system, conversation).await;
            console.show_reply(&reply);
            let signals = self.classifier.classify(&reply);
            debug!("Reply signals: {:?}", signals);

            if let Some(proposed) = signals.proposed_query {
                console.show(&format!("Proposed search query: {}", proposed));
                let modified = console
                    .read_line("Press Enter to approve or type a modified query: ")
                    .await?;
                let query = match modified.trim() {
                    "" => proposed,
                    other => other.to_string(),
                };

                if query.is_empty() {
                    console.show("No search query given, skipping the search.");
                } else {
                    console.show("\nSearching...");
                    let results = self.run_search(&query).await;
                    *searches += 1;
                    console.show_search_results(&results);
                    console.pause().await?;

                    conversation.push_user(search_results_message(&query, &results));
                    let analysis = self.ask(system, conversation).await;
                    console.show_reply(&analysis);
                    console.pause().await?;
                    reply = analysis;
                }
            }

            if signals.offers_next_criterion {
                let criterion = self.choose_criterion(console).await?;
                conversation.push_user(criterion_message(&criterion.text()));
                reply = self.ask(system, conversation).await;
                console.show_reply(&reply);
            }

            if self.classifier.classify(&reply).investigation_complete {
                return Ok(InvestigationEnd::Completed);
            }
        }
    }

    /// Show the criteria menu until a valid choice is made.
    pub async fn choose_criterion(
        &self,
        console: &dyn InvestigatorConsole,
    ) -> Result<Criterion, ConsoleError> {
        console.show("\nWhich criterion would you like to investigate?");
        for (i, criterion) in CRITERIA.iter().enumerate() {
            console.show(&format!("{}. {}", i + 1, criterion));
        }
        console.show(&format!("{}. Custom question", menu_len()));

        loop {
            let input = console.read_line("\nEnter the number of your choice: ").await?;
            match parse_choice(&input) {
                Ok(CriterionChoice::Listed(index)) => return Ok(Criterion::Listed(index)),
                Ok(CriterionChoice::Custom) => {
                    let question = console.read_line("Enter your custom question: ").await?;
                    return Ok(Criterion::Custom(question.trim().to_string()));
                }
                Err(DomainError::InvalidCriterion(message)) => console.show(&message),
                Err(e) => console.show(&e.to_string()),
            }
        }
    }

    /// Send the conversation and record the reply in it.
    async fn ask(&self, system: &str, conversation: &mut Conversation) -> String {
        let mut request =
            CompletionRequest::new(self.chat_params.model.clone(), conversation.messages().to_vec())
                .with_system(system);
        if let Some(max_tokens) = self.chat_params.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let reply = match complete_logged(
            self.chat.as_ref(),
            self.conversation_logger.as_ref(),
            &request,
        )
        .await
        {
            Ok(completion) => completion.text,
            Err(e) => {
                warn!("Error from {}: {}", self.chat.provider(), e);
                NO_REPLY.to_string()
            }
        };
        debug!("Reply: {}", preview(&reply, REPLY_PREVIEW_CHARS));
        conversation.push_assistant(reply.clone());
        reply
    }

    async fn run_search(&self, query: &str) -> String {
        let request = CompletionRequest::new(
            self.search_params.model.clone(),
            vec![Message::user(query)],
        );
        match complete_logged(
            self.search.as_ref(),
            self.conversation_logger.as_ref(),
            &request,
        )
        .await
        {
            Ok(completion) => {
                debug!("Search results: {}", preview(&completion.text, REPLY_PREVIEW_CHARS));
                completion.text
            }
            Err(e) => {
                warn!("Error from {}: {}", self.search.provider(), e);
                NO_SEARCH_RESULTS.to_string()
            }
        }
    }
}
