//! Statbotics HTTP client.

use crate::error::StatboticsError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.statbotics.io/v3";

/// Statbotics v3 client. The API is public and needs no key.
#[derive(Clone)]
pub struct StatboticsClient {
    client: Client,
    base_url: String,
}

impl StatboticsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StatboticsError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Health check - returns true if the API root answers.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// A team's performance at one event, e.g. `(254, "2024casj")`.
    #[instrument(skip(self))]
    pub async fn team_event(&self, team: u32, event_key: &str) -> Result<TeamEvent, StatboticsError> {
        self.get(&format!("/team_event/{}/{}", team, encode(event_key)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn event(&self, event_key: &str) -> Result<Event, StatboticsError> {
        self.get(&format!("/event/{}", encode(event_key))).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StatboticsError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let body = response.text().await?;
                debug!("Response body: {}", body.chars().take(200).collect::<String>());
                serde_json::from_str(&body).map_err(StatboticsError::from)
            }
            StatusCode::NOT_FOUND => Err(StatboticsError::NotFound(path.to_string())),
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Statbotics rate limit exceeded");
                Err(StatboticsError::RateLimit)
            }
            _ => Err(StatboticsError::Api {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into()),
            }),
        }
    }
}
