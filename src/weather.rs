//! Degree-day lookup for design regions

use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{QuoteError, Result};
use crate::models::ClimateData;

/// Source of degree-day figures, queried once per house
pub trait WeatherProvider {
    async fn fetch(&self, region: &str) -> Result<ClimateData>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

/// Degree-day service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpWeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpWeatherProvider {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        if config.base_url.trim().is_empty() {
            bail!("weather.base_url is not configured");
        }
        if config.api_key.is_empty() {
            bail!("weather.api_key is not configured");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build weather HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }
}

impl WeatherProvider for HttpWeatherProvider {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, region: &str) -> Result<ClimateData> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[("location", region)])
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(QuoteError::RegionNotFound(region.to_owned()));
        }
        if !status.is_success() {
            return Err(QuoteError::WeatherService(format!(
                "unexpected status {} for region '{}'",
                status, region
            )));
        }

        let body: WeatherResponse = response.json().await.map_err(|e| {
            QuoteError::WeatherService(format!("malformed response for region '{}': {}", region, e))
        })?;

        let climate = body.location.into_climate_data()?;
        tracing::debug!(location = %climate.location, degree_days = climate.degree_days, "Fetched degree days");
        Ok(climate)
    }
}

fn transport_error(e: reqwest::Error) -> QuoteError {
    if e.is_timeout() {
        QuoteError::WeatherService("request timed out".to_string())
    } else {
        QuoteError::WeatherService(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    location: LocationRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationRecord {
    location: String,
    degree_days: DegreeDays,
}

// The service has been seen to send degree days both as a number and as a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DegreeDays {
    Number(f64),
    Text(String),
}

impl LocationRecord {
    fn into_climate_data(self) -> Result<ClimateData> {
        let degree_days = match self.degree_days {
            DegreeDays::Number(value) => value,
            DegreeDays::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                QuoteError::WeatherService(format!(
                    "degree days for '{}' is not a number: '{}'",
                    self.location, text
                ))
            })?,
        };

        Ok(ClimateData {
            location: self.location,
            degree_days,
        })
    }
}
