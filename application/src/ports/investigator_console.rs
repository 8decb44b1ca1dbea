//! Investigator console port
//!
//! The interactive investigation reads lines from and writes text to a
//! console. The terminal adapter lives in the presentation layer; tests use
//! a scripted console.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a console, not decisions made by the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Input closed (EOF) or the user interrupted
    #[error("Input closed")]
    Closed,

    /// Terminal read or write failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for the interactive investigation's terminal
#[async_trait]
pub trait InvestigatorConsole: Send + Sync {
    /// Clear the screen and draw the banner
    fn reset(&self) {}

    /// Print a block of text
    fn show(&self, text: &str);

    /// Print an assistant reply
    fn show_reply(&self, text: &str) {
        self.show(text);
    }

    /// Print search results inside a frame
    fn show_search_results(&self, text: &str) {
        self.show(text);
    }

    /// Prompt and read one line (without the trailing newline)
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError>;

    /// Wait for the user to acknowledge
    async fn pause(&self) -> Result<(), ConsoleError> {
        self.read_line("\nPress Enter to continue...").await.map(|_| ())
    }
}
