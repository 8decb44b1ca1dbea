//! Application layer for company-scout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{RequestParams, ResearchParams};
pub use ports::{
    artifact_store::{ArtifactError, ArtifactStore},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    investigator_console::{ConsoleError, InvestigatorConsole},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway, StreamHandle, StreamTranscript},
    progress::{NoResearchProgress, ResearchProgress},
};
pub use use_cases::gather_company_info::{GatherCompanyInfoError, GatherCompanyInfoUseCase};
pub use use_cases::investigate::{
    InvestigateError, InvestigateUseCase, InvestigationEnd, InvestigationSummary,
};
pub use use_cases::probe::{ProbeError, ProbeReport, ProbeUseCase};
pub use use_cases::resolve_facet::{FacetOutcome, ResolveFacetError, ResolveFacetUseCase};
pub use use_cases::search::{SearchInput, SearchOutput, SearchUseCase};
