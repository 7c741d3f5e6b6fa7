//! OpenWeather current-conditions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{WeatherError, WeatherReport, WeatherService};
use crate::config::{Units, WeatherConfig};

/// Client for the OpenWeather `/data/2.5/weather` endpoint
pub struct OpenWeatherClient {
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    units: Units,
    http: Client,
}

impl OpenWeatherClient {
    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            api_key: config.get_api_key(),
            api_key_env: config.api_key_env.clone(),
            base_url: config.base_url.clone(),
            units: config.units,
            http,
        })
    }

    fn parse_response(&self, body: CurrentWeather) -> Result<WeatherReport, WeatherError> {
        let description = body
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| WeatherError::InvalidResponse("missing weather description".to_string()))?;

        Ok(WeatherReport {
            description,
            temperature: body.main.temp,
            units: self.units,
        })
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        debug!(%city, "current: called");
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| WeatherError::MissingApiKey(self.api_key_env.clone()))?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", self.units.as_param())])
            .send()
            .await?
            .error_for_status()?;

        let body: CurrentWeather = response.json().await?;
        debug!(%city, "current: success");
        self.parse_response(body)
    }
}

// OpenWeather response types

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    weather: Vec<WeatherCondition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: serde_json::Number,
}
