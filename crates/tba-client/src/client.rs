//! The Blue Alliance HTTP client.

use crate::error::TbaError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.thebluealliance.com/api/v3";

const AUTH_HEADER: &str = "X-TBA-Auth-Key";

/// The Blue Alliance v3 client.
///
/// The auth key is held as a `SecretString` so it never shows up in logs.
#[derive(Clone)]
pub struct TbaClient {
    client: Client,
    base_url: String,
    auth_key: SecretString,
}

impl TbaClient {
    pub fn new(
        auth_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TbaError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_key: SecretString::new(auth_key.into()),
        })
    }

    /// Check that the API is reachable and the key is accepted.
    pub async fn health_check(&self) -> bool {
        self.status().await.is_ok()
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<ApiStatus, TbaError> {
        self.get("/status").await
    }

    #[instrument(skip(self))]
    pub async fn team(&self, team: u32) -> Result<Team, TbaError> {
        self.get(&format!("/team/{}", team_key(team))).await
    }

    /// Events a team attended in a season.
    #[instrument(skip(self))]
    pub async fn team_events(&self, team: u32, year: i32) -> Result<Vec<Event>, TbaError> {
        self.get(&format!("/team/{}/events/{}", team_key(team), year))
            .await
    }

    /// Seasons a team competed in, as returned by TBA (usually ascending).
    #[instrument(skip(self))]
    pub async fn years_participated(&self, team: u32) -> Result<Vec<i32>, TbaError> {
        self.get(&format!("/team/{}/years_participated", team_key(team)))
            .await
    }

    /// Awards for a team, across all seasons or only `year`.
    #[instrument(skip(self))]
    pub async fn team_awards(&self, team: u32, year: Option<i32>) -> Result<Vec<Award>, TbaError> {
        let path = match year {
            Some(year) => format!("/team/{}/awards/{}", team_key(team), year),
            None => format!("/team/{}/awards", team_key(team)),
        };
        self.get(&path).await
    }

    /// Event rankings. TBA answers `null` for events without rankings,
    /// which comes back as an empty list.
    #[instrument(skip(self))]
    pub async fn event_rankings(&self, event_key: &str) -> Result<Vec<Ranking>, TbaError> {
        let rankings: Option<EventRankings> =
            self.get(&format!("/event/{}/rankings", encode(event_key))).await?;
        Ok(rankings.map(|r| r.rankings).unwrap_or_default())
    }

    /// Playoff alliances, empty when alliance selection has not happened.
    #[instrument(skip(self))]
    pub async fn event_alliances(&self, event_key: &str) -> Result<Vec<Alliance>, TbaError> {
        let alliances: Option<Vec<Alliance>> =
            self.get(&format!("/event/{}/alliances", encode(event_key))).await?;
        Ok(alliances.unwrap_or_default())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TbaError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(AUTH_HEADER, self.auth_key.expose_secret())
            .send()
            .await?;

        self.handle_response(path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, TbaError> {
        let status = response.status();

        match status {
            s if s.is_success() => {
                let body = response.text().await?;
                debug!("Response body: {}", body.chars().take(200).collect::<String>());
                serde_json::from_str(&body).map_err(TbaError::from)
            }
            StatusCode::NOT_FOUND => Err(TbaError::NotFound(path.to_string())),
            StatusCode::UNAUTHORIZED => {
                warn!("TBA rejected the auth key");
                Err(TbaError::Unauthorized)
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into());
                Err(TbaError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
