//! CLI argument parsing for the travel planner

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Console travel itinerary planner", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Destination catalog (JSON) to use instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Answer follow-up questions with the text-completion service
    #[arg(short, long, global = true)]
    pub assistant: bool,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plan a trip interactively (default)
    Plan,

    /// List the destinations in the loaded catalog
    Catalog,
}
