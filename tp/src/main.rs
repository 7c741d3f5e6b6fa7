//! Travel Planner
//!
//! CLI entry point for an interactive trip-planning session.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use travelplanner::cli::{Cli, Command};
use travelplanner::config::{Config, FollowUpMode};
use travelplanner::{Catalog, FollowUpResponder, PromptLoader, ReadlineConsole, Workflow, create_client, create_service};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("travelplanner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("travelplanner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let catalog_path = cli.catalog.as_deref().or(config.catalog.path.as_deref());
    let catalog = Catalog::resolve(catalog_path).context("Failed to load destination catalog")?;

    let command = cli.command.clone().unwrap_or(Command::Plan);
    debug!(?command, "main: dispatching command");
    match command {
        Command::Plan => cmd_plan(&cli, &config, catalog).await,
        Command::Catalog => cmd_catalog(&catalog),
    }
}

async fn cmd_plan(cli: &Cli, config: &Config, catalog: Catalog) -> Result<()> {
    let mode = if cli.assistant {
        FollowUpMode::Assistant
    } else {
        config.followup.mode
    };
    info!(%mode, "Starting planning session");

    for name in config.missing_api_keys() {
        warn!(env = %name, "API key not set");
        eprintln!("{} {} is not set; related follow-up answers will be unavailable", "Warning:".yellow(), name);
    }

    let llm = create_client(&config.llm).context("Failed to create text-completion client")?;
    let weather = create_service(&config.weather).context("Failed to create weather client")?;
    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let prompts = PromptLoader::new(base);

    let responder = FollowUpResponder::new(mode, weather, llm, prompts, config.llm.max_tokens);
    let mut workflow = Workflow::new(catalog, responder);
    let mut console = ReadlineConsole::new().context("Failed to initialize console")?;

    println!("{}", "🌍 Welcome to the Travel Planner AI!".bold());
    match workflow.run(&mut console).await {
        Ok(state) => {
            info!(questions = state.history().len(), "Session finished");
            println!();
            println!("🎉 Thank you for using the Travel Planner AI! Have a great trip! 🚀");
            Ok(())
        }
        Err(e) if e.is_terminal() => {
            warn!(error = %e, "Session ended early");
            println!("{} {}", "❌".red(), e);
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Planning session failed"),
    }
}

fn cmd_catalog(catalog: &Catalog) -> Result<()> {
    println!("Catalog: {} ({} destinations)", catalog.source().to_string().cyan(), catalog.len());
    for destination in catalog.destinations() {
        println!(
            "  {:<16} {:<7} {}",
            destination.name,
            destination.budget_level.to_string(),
            destination.tags.join(", ").dimmed()
        );
    }
    Ok(())
}
