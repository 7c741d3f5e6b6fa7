//! Travel Planner - console travel itinerary planner
//!
//! A single interactive session walks through a fixed sequence of steps:
//! collect preferences, filter the destination catalog, let the user pick one,
//! build a day-by-day itinerary, then answer follow-up questions until the user
//! is done.
//!
//! # Modules
//!
//! - [`domain`] - Preferences, destinations and itineraries
//! - [`catalog`] - Destination catalog loading
//! - [`planner`] - Workflow steps and the session state machine
//! - [`console`] - Line-oriented user interaction
//! - [`llm`] - Text-completion client for free-form follow-up answers
//! - [`weather`] - Current-conditions lookup
//! - [`prompts`] - Prompt templates
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod weather;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogSource};
pub use config::{Config, FollowUpMode, LlmConfig, WeatherConfig};
pub use console::{Console, ReadlineConsole, ScriptedConsole};
pub use domain::{BudgetLevel, Destination, Itinerary, ItineraryDay, Preferences, Season};
pub use error::PlannerError;
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, create_client};
pub use planner::{Exchange, FollowUpResponder, SessionState, Step, Workflow};
pub use prompts::PromptLoader;
pub use weather::{WeatherError, WeatherReport, WeatherService, create_service};
