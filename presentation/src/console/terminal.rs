//! Terminal-backed investigator console

use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use scout_application::{ConsoleError, InvestigatorConsole};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Title drawn at the top of the cleared screen
pub const BANNER_TITLE: &str = "SMARTBROKER";

/// Reads lines from an async reader and prints to stdout
pub struct TerminalConsole<R = BufReader<Stdin>> {
    input: Mutex<R>,
    clear_screen: bool,
}

impl TerminalConsole {
    /// Console over the process's stdin
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> TerminalConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
            clear_screen: true,
        }
    }

    /// Keep previous output on screen instead of clearing it
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    async fn next_line(&self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let read = self
            .input
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| ConsoleError::Io(e.to_string()))?;
        if read == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

#[async_trait]
impl<R> InvestigatorConsole for TerminalConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    fn reset(&self) {
        if self.clear_screen {
            let mut stdout = io::stdout();
            // Not a terminal: keep printing below the previous output
            let _ = execute!(stdout, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0));
        }
        println!("{}", ConsoleFormatter::banner(BANNER_TITLE));
    }

    fn show(&self, text: &str) {
        println!("{}", text);
    }

    fn show_reply(&self, text: &str) {
        println!("\n{}\n", text);
    }

    fn show_search_results(&self, text: &str) {
        println!("{}", ConsoleFormatter::framed("Search Results:", text));
    }

    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        print!("{}", prompt.bold());
        io::stdout()
            .flush()
            .map_err(|e| ConsoleError::Io(e.to_string()))?;
        self.next_line().await
    }
}
