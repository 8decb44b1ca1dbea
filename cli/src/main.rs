//! CLI entrypoint for company-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use scout_application::use_cases::probe::DEFAULT_QUESTION;
use scout_application::{
    ConversationLogger, GatherCompanyInfoUseCase, InvestigateUseCase, InvestigationEnd,
    NoConversationLogger, ProbeUseCase, RequestParams, ResearchParams, ResearchProgress,
    ResolveFacetUseCase, SearchInput, SearchUseCase,
};
use scout_domain::{ResearchMode, SearchTool, search::catalogue};
use scout_infrastructure::{
    AnthropicConfig, AnthropicGateway, ConfigLoader, CredentialError, FileConfig,
    FsArtifactStore, JsonlConversationLogger, PerplexityConfig, PerplexityGateway, write_profile,
};
use scout_presentation::{
    AttemptPrinter, Cli, Command, ConsoleFormatter, ModeArg, OutputConfig, ResearchSpinner,
    TerminalConsole,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so API keys and SCOUT_* overrides from .env are visible
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        std::process::exit(2);
    };

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    OutputConfig {
        color: config.output.color,
    }
    .apply();

    let logger: Arc<dyn ConversationLogger> = match &cli.transcript {
        Some(path) => Arc::new(
            JsonlConversationLogger::open(path)
                .with_context(|| format!("Failed to open transcript {}", path.display()))?,
        ),
        None => Arc::new(NoConversationLogger),
    };

    let providers = Providers::for_command(&command, &config);

    info!("Starting company-scout");

    match command {
        Command::Company {
            name,
            output,
            mode,
            json,
        } => {
            let output = output.as_deref();
            run_company(&config, &providers, logger, &name, output, mode, json, cli.verbose).await
        }
        Command::Search { kind, query, model } => match kind.tool() {
            Some(tool) => {
                let query = query.unwrap_or_default();
                run_search(&config, &providers, logger, tool, query, model).await
            }
            None => {
                println!("{}", catalogue());
                Ok(())
            }
        },
        Command::Investigate => run_investigation(&config, &providers, logger).await,
        Command::Probe { question, out_dir } => {
            run_probe(&config, &providers, logger, question.as_deref(), out_dir).await
        }
    }
}

/// Print configuration issues; errors abort the run
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("{} {}", "error:".red().bold(), issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

/// Missing credentials end the process with the remediation message
fn credentials<T>(resolved: Result<T, CredentialError>) -> T {
    match resolved {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Provider settings resolved for the command about to run
struct Providers {
    anthropic: Option<AnthropicConfig>,
    perplexity: Option<PerplexityConfig>,
}

impl Providers {
    /// Resolve every credential `command` needs before anything runs
    fn for_command(command: &Command, config: &FileConfig) -> Self {
        Self {
            anthropic: command
                .needs_anthropic()
                .then(|| credentials(config.providers.anthropic.resolve())),
            perplexity: command
                .needs_perplexity()
                .then(|| credentials(config.providers.perplexity.resolve())),
        }
    }

    fn anthropic(&self) -> Result<Arc<AnthropicGateway>> {
        let config = self
            .anthropic
            .clone()
            .ok_or_else(|| anyhow!("Anthropic provider not resolved for this command"))?;
        Ok(Arc::new(AnthropicGateway::new(config)?))
    }

    fn perplexity(&self) -> Result<Arc<PerplexityGateway>> {
        let config = self
            .perplexity
            .clone()
            .ok_or_else(|| anyhow!("Perplexity provider not resolved for this command"))?;
        Ok(Arc::new(PerplexityGateway::new(config)?))
    }
}

/// Configured search model, if any
fn search_params(config: &FileConfig) -> RequestParams {
    let (model, _) = config.models.parse_search();
    match model {
        Some(model) => RequestParams::search().with_model(model),
        None => RequestParams::search(),
    }
}

async fn run_company(
    config: &FileConfig,
    providers: &Providers,
    logger: Arc<dyn ConversationLogger>,
    name: &str,
    output: Option<&Path>,
    mode: Option<ModeArg>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let gateway = providers.anthropic()?;
    let (model, _) = config.models.parse_research();
    let mode = mode.map(ResearchMode::from).unwrap_or(config.research.mode);
    let params = ResearchParams::default()
        .with_mode(mode)
        .with_max_attempts(config.research.max_attempts);

    let resolver = ResolveFacetUseCase::new(gateway, RequestParams::research().with_model(model))
        .with_conversation_logger(logger);
    let use_case = GatherCompanyInfoUseCase::new(resolver, params);

    // JSON goes to stdout, so attempts stay off it
    let progress: Box<dyn ResearchProgress> = if !json && mode.shows_attempts(verbose > 0) {
        Box::new(AttemptPrinter)
    } else {
        Box::new(ResearchSpinner::new())
    };

    if !json {
        println!("{}", ConsoleFormatter::research_intro(name));
    }

    let profile = use_case.execute(name, progress.as_ref()).await?;

    if json {
        println!("{}", ConsoleFormatter::format_json(&profile));
    } else {
        println!("{}", ConsoleFormatter::company_summary(&profile));
    }

    if let Some(path) = output {
        write_profile(path, &profile)?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

async fn run_search(
    config: &FileConfig,
    providers: &Providers,
    logger: Arc<dyn ConversationLogger>,
    tool: SearchTool,
    query: String,
    model: Option<String>,
) -> Result<()> {
    let gateway = providers.perplexity()?;
    let mut input = SearchInput::new(tool, query);
    let model = model.or_else(|| config.models.parse_search().0.map(|m| m.to_string()));
    if let Some(model) = model {
        input = input.with_model(model);
    }

    let output = SearchUseCase::new(gateway)
        .with_conversation_logger(logger)
        .execute(input)
        .await?;

    if output.failed {
        eprintln!("{}", output.text.red());
    } else {
        println!("{}", output.text);
    }
    Ok(())
}

async fn run_investigation(
    config: &FileConfig,
    providers: &Providers,
    logger: Arc<dyn ConversationLogger>,
) -> Result<()> {
    let chat = providers.anthropic()?;
    let search = providers.perplexity()?;
    let (model, _) = config.models.parse_investigation();

    let use_case = InvestigateUseCase::new(chat, search)
        .with_chat_params(RequestParams::investigation().with_model(model))
        .with_search_params(search_params(config))
        .with_conversation_logger(logger);

    let console = TerminalConsole::stdin();
    let summary = use_case.execute(&console).await?;

    match summary.end {
        InvestigationEnd::Completed => {
            println!("\nInvestigation complete. Thank you for using SmartBroker!");
            println!("A full report is available for this company with all findings.");
        }
        InvestigationEnd::UserQuit => println!("\nInvestigation ended."),
        InvestigationEnd::InputClosed => println!(),
    }
    info!(
        "{} search(es), {} message(s) exchanged",
        summary.searches, summary.messages
    );
    Ok(())
}

async fn run_probe(
    config: &FileConfig,
    providers: &Providers,
    logger: Arc<dyn ConversationLogger>,
    question: Option<&str>,
    out_dir: PathBuf,
) -> Result<()> {
    let gateway = providers.perplexity()?;
    let store = Arc::new(FsArtifactStore::new(out_dir));

    let use_case = ProbeUseCase::new(gateway, store)
        .with_model(search_params(config).model)
        .with_conversation_logger(logger);

    let report = use_case.execute(question.unwrap_or(DEFAULT_QUESTION)).await?;

    let labels = ["Non-streaming response", "Streaming response"];
    for (label, location) in labels.iter().zip(&report.saved) {
        println!("{} saved to {}", label, location);
    }
    if let Some((error, location)) = &report.failure {
        eprintln!("{} {}", "Error occurred:".red().bold(), error);
        eprintln!("Error details saved to {}", location);
        std::process::exit(1);
    }
    Ok(())
}
