//! Web search subdomain
//!
//! Three search tools run over the chat-completion provider. Failures are
//! never propagated to the caller; they are rendered as text in place of the
//! results (see [`describe_search_failure`]).

pub mod format;
pub mod tool;

pub use format::{FailureKind, describe_search_failure, format_search_result};
pub use tool::{SearchTool, catalogue, resolve_search_model};
