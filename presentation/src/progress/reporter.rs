//! Progress reporting for company lookups

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scout_application::ResearchProgress;
use scout_domain::{Determination, ExtractedAnswer, Facet};
use std::sync::Mutex;
use std::time::Duration;

/// Prints every attempt's sections as plain text
pub struct AttemptPrinter;

impl ResearchProgress for AttemptPrinter {
    fn on_facet_start(&self, facet: Facet, _subject: &str) {
        println!("{}", facet.status_line());
    }

    fn on_attempt_start(&self, facet: Facet, subject: &str, attempt: u32, _max_attempts: u32) {
        if attempt > 0 {
            println!("{}", ConsoleFormatter::retry_notice(facet, subject, attempt).yellow());
        }
    }

    fn on_attempt_parsed(&self, facet: Facet, subject: &str, attempt: u32, answer: &ExtractedAnswer) {
        println!("{}", ConsoleFormatter::attempt_banner(facet, subject, attempt));
        println!("{}", ConsoleFormatter::attempt_sections(answer));
    }

    fn on_request_failed(&self, _facet: Facet, _subject: &str, _attempt: u32, message: &str) {
        println!("{}", message.red());
    }

    fn on_attempts_exhausted(&self, facet: Facet, subject: &str, max_attempts: u32) {
        println!(
            "{}",
            ConsoleFormatter::exhausted_notice(facet, subject, max_attempts).yellow()
        );
    }
}

/// Spinner per facet; attempts stay hidden
pub struct ResearchSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl ResearchSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn outcome_line(facet: Facet, determination: &Determination) -> String {
        let mark = match determination {
            Determination::Concrete(_) => "v".green(),
            _ => "x".red(),
        };
        format!("{} {}: {}", mark, facet.title(), determination)
    }

    fn println(&self, line: String) {
        match self.bar.lock().ok().and_then(|bar| bar.clone()) {
            Some(bar) => bar.println(line),
            None => println!("{}", line),
        }
    }
}

impl Default for ResearchSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ResearchProgress for ResearchSpinner {
    fn on_facet_start(&self, facet: Facet, _subject: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(facet.title());
        pb.set_message(facet.status_line());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_attempt_start(&self, _facet: Facet, _subject: &str, _attempt: u32, _max_attempts: u32) {}

    fn on_attempt_parsed(&self, _facet: Facet, _subject: &str, _attempt: u32, _answer: &ExtractedAnswer) {}

    fn on_request_failed(&self, _facet: Facet, _subject: &str, _attempt: u32, message: &str) {
        self.println(message.red().to_string());
    }

    fn on_attempts_exhausted(&self, facet: Facet, subject: &str, max_attempts: u32) {
        self.println(
            ConsoleFormatter::exhausted_notice(facet, subject, max_attempts)
                .yellow()
                .to_string(),
        );
    }

    fn on_facet_complete(&self, facet: Facet, determination: &Determination) {
        let finished = self.bar.lock().ok().and_then(|mut bar| bar.take());
        match finished {
            Some(pb) => pb.finish_with_message(Self::outcome_line(facet, determination)),
            None => println!("{}", Self::outcome_line(facet, determination)),
        }
    }
}
