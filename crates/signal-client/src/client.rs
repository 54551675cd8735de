//! Signal CLI REST API client.

use crate::error::SignalError;
use crate::types::*;
use crate::ChatTransport;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

#[derive(Clone)]
pub struct SignalClient {
    client: Client,
    base_url: String,
    phone_number: String,
}

impl SignalClient {
    /// `phone_number` is the bot's registered account.
    pub fn new(
        base_url: impl Into<String>,
        phone_number: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SignalError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            phone_number: phone_number.into(),
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Drain pending messages for the bot's account.
    #[instrument(skip(self))]
    pub async fn receive(&self) -> Result<Vec<IncomingMessage>, SignalError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/receive/{}",
                self.base_url,
                encode(&self.phone_number)
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SignalError::Api(response.text().await.unwrap_or_default()));
        }

        let messages: Vec<IncomingMessage> = response.json().await?;
        debug!("Received {} envelopes", messages.len());
        Ok(messages)
    }

    /// Send `message` to a number or group id.
    #[instrument(skip(self, message))]
    pub async fn send(&self, recipient: &str, message: &str) -> Result<(), SignalError> {
        let request = SendMessageRequest {
            message: message.to_string(),
            number: self.phone_number.clone(),
            recipients: vec![recipient.to_string()],
        };

        let response = self
            .client
            .post(format!("{}/v2/send", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(SignalError::SendFailed(msg));
        }

        Ok(())
    }
}

#[async_trait]
impl ChatTransport for SignalClient {
    async fn reply(&self, to: &ChatMessage, text: &str) -> Result<(), SignalError> {
        self.send(to.reply_target(), text).await
    }
}
