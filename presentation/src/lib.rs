//! Presentation layer for company-scout
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive terminal console.

pub mod cli;
pub mod config;
pub mod console;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ModeArg, SearchKind};
pub use config::OutputConfig;
pub use console::TerminalConsole;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{AttemptPrinter, ResearchSpinner};
