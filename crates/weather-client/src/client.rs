//! wttr.in HTTP client.

use crate::error::WeatherError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};
use urlencoding::encode;

/// Production base URL.
pub const DEFAULT_BASE_URL: &str = "https://wttr.in";

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Current conditions for a free-form location. Location parts are
    /// joined with `+`, which wttr.in reads as spaces.
    #[instrument(skip(self))]
    pub async fn current(&self, location_parts: &[&str]) -> Result<CurrentCondition, WeatherError> {
        let location = location_parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("+");

        let url = format!("{}/{}?format=j1", self.base_url, encode(&location));
        debug!(%url, "Fetching weather");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        let report: WeatherReport = match status {
            s if s.is_success() => serde_json::from_str(&response.text().await?)?,
            StatusCode::NOT_FOUND => return Err(WeatherError::NotFound(location)),
            _ => {
                return Err(WeatherError::Api {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                })
            }
        };

        report
            .current_condition
            .into_iter()
            .next()
            .ok_or(WeatherError::EmptyReport)
    }
}
