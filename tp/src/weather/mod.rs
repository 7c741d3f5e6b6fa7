//! Current weather lookups
//!
//! The follow-up responder asks for the current conditions in the selected
//! city. Every failure is reported uniformly; callers turn it into a fixed
//! message.

mod openweather;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use openweather::OpenWeatherClient;

use crate::config::{Units, WeatherConfig};

/// Errors from a weather lookup
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("API key not found. Set the {0} environment variable.")]
    MissingApiKey(String),

    #[error("Weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected weather response: {0}")]
    InvalidResponse(String),
}

/// Current conditions for one city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Short description, e.g. "light rain"
    pub description: String,
    /// Temperature exactly as the service reported it
    pub temperature: serde_json::Number,
    pub units: Units,
}

impl WeatherReport {
    /// One-line summary, e.g. "The weather in Lisbon is 21.5°C with Clear sky."
    pub fn summary(&self, city: &str) -> String {
        format!(
            "The weather in {} is {}{} with {}.",
            city,
            self.temperature,
            self.units.temperature_symbol(),
            capitalize(&self.description)
        )
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Current-conditions lookup by city name
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Create the configured weather service
pub fn create_service(config: &WeatherConfig) -> Result<Arc<dyn WeatherService>, WeatherError> {
    Ok(Arc::new(OpenWeatherClient::from_config(config)?))
}
