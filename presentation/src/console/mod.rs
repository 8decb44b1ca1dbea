//! Terminal adapters for interactive commands

pub mod terminal;

pub use terminal::TerminalConsole;
