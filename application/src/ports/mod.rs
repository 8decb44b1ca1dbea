//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod artifact_store;
pub mod conversation_logger;
pub mod investigator_console;
pub mod llm_gateway;
pub mod progress;
