//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use scout_domain::{ResearchMode, SearchTool};
use std::path::PathBuf;

/// Research mode as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Retry ambiguous matches and print every attempt
    Thorough,
    /// One attempt per facet, print only the results
    Quick,
}

impl From<ModeArg> for ResearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Thorough => ResearchMode::Thorough,
            ModeArg::Quick => ResearchMode::Quick,
        }
    }
}

/// Search tool selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    /// Current information on any topic
    Web,
    /// Information about an image or visual topic
    Image,
    /// Short answer to a factual question
    Fact,
    /// List the available tools and models
    Help,
}

impl SearchKind {
    /// The tool to run, `None` for the help page
    pub fn tool(&self) -> Option<SearchTool> {
        match self {
            SearchKind::Web => Some(SearchTool::Web),
            SearchKind::Image => Some(SearchTool::Image),
            SearchKind::Fact => Some(SearchTool::Fact),
            SearchKind::Help => None,
        }
    }
}

/// CLI arguments for company-scout
#[derive(Parser, Debug)]
#[command(name = "company-scout")]
#[command(author, version, about = "Company research with Claude and Perplexity")]
#[command(long_about = r#"
Company Scout asks LLMs to research companies and search the web.

Commands:
  company       Find a company's website, owner and products
  search        Run a Perplexity web, image or factual search
  investigate   Interactive acquisition-target investigation
  probe         Save raw Perplexity responses for debugging

API keys are read from ANTHROPIC_API_KEY and PERPLEXITY_API_KEY (a .env file
in the working directory is loaded first).

Configuration files are loaded from (in priority order):
1. SCOUT_* environment variables (e.g. SCOUT_RESEARCH__MODE=quick)
2. --config <path>     Explicit config file
3. ./scout.toml        Project-level config
4. ~/.config/company-scout/config.toml   Global config

Example:
  company-scout company "Acme Dental Software" -o acme.json
  company-scout search web "latest news on solid-state batteries" --model sonar-medium
  company-scout investigate
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append every request and response to a JSONL transcript
    #[arg(long, global = true, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a company's website, owner and products
    Company {
        /// Company name to research
        name: String,

        /// Save the results as JSON to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Research mode (defaults to the configured one)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Print the results as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Search with Perplexity
    Search {
        /// Which search to run
        #[arg(value_enum)]
        kind: SearchKind,

        /// What to search for
        #[arg(required_if_eq_any([("kind", "web"), ("kind", "image"), ("kind", "fact")]))]
        query: Option<String>,

        /// Perplexity model (web search only)
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Interactive acquisition-target investigation
    Investigate,

    /// Save raw Perplexity responses (plain and streamed) for debugging
    Probe {
        /// Question to send
        #[arg(short, long)]
        question: Option<String>,

        /// Directory the response files are written to
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Command {
    pub fn needs_anthropic(&self) -> bool {
        matches!(self, Command::Company { .. } | Command::Investigate)
    }

    pub fn needs_perplexity(&self) -> bool {
        match self {
            Command::Company { .. } => false,
            Command::Search { kind, .. } => *kind != SearchKind::Help,
            Command::Investigate | Command::Probe { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_company_args() {
        let cli = Cli::try_parse_from([
            "company-scout",
            "company",
            "Acme Corp",
            "-o",
            "acme.json",
            "--mode",
            "quick",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Company { name, output, mode, json }) => {
                assert_eq!(name, "Acme Corp");
                assert_eq!(output, Some(PathBuf::from("acme.json")));
                assert_eq!(mode, Some(ModeArg::Quick));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_company_requires_name() {
        assert!(Cli::try_parse_from(["company-scout", "company"]).is_err());
    }

    #[test]
    fn test_search_requires_query_except_help() {
        assert!(Cli::try_parse_from(["company-scout", "search", "web"]).is_err());
        let cli = Cli::try_parse_from(["company-scout", "search", "help"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Search { kind: SearchKind::Help, query: None, .. })
        ));
    }

    #[test]
    fn test_search_with_model() {
        let cli = Cli::try_parse_from([
            "company-scout",
            "search",
            "web",
            "NBA scores",
            "--model",
            "sonar-medium",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Search { kind, query, model }) => {
                assert_eq!(kind.tool(), Some(SearchTool::Web));
                assert_eq!(query.as_deref(), Some("NBA scores"));
                assert_eq!(model.as_deref(), Some("sonar-medium"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_credentials_needed_per_command() {
        let investigate = Command::Investigate;
        assert!(investigate.needs_anthropic() && investigate.needs_perplexity());

        let help = Command::Search { kind: SearchKind::Help, query: None, model: None };
        assert!(!help.needs_anthropic() && !help.needs_perplexity());

        let probe = Command::Probe { question: None, out_dir: PathBuf::from(".") };
        assert!(!probe.needs_anthropic() && probe.needs_perplexity());
    }

    #[test]
    fn test_probe_defaults() {
        let cli = Cli::try_parse_from(["company-scout", "probe"]).unwrap();
        match cli.command {
            Some(Command::Probe { question, out_dir }) => {
                assert!(question.is_none());
                assert_eq!(out_dir, PathBuf::from("."));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
