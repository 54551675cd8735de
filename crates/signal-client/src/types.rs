//! Signal CLI REST API types and the transport-neutral chat message.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /v1/receive/{number}`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub envelope: Envelope,
    pub account: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub source: String,
    pub source_name: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub data_message: Option<DataMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMessage {
    pub message: Option<String>,
    pub timestamp: i64,
    pub group_info: Option<GroupInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub group_id: String,
}

/// Body of `POST /v2/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub number: String,
    pub recipients: Vec<String>,
}

/// A text message addressed to the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Who sent it.
    pub author: String,
    pub author_name: Option<String>,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Set for group messages.
    pub group_id: Option<String>,
}

impl ChatMessage {
    /// A direct message, mostly useful in tests.
    pub fn direct(author: impl Into<String>, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            author: author.into(),
            author_name: None,
            text: text.into(),
            timestamp,
            group_id: None,
        }
    }

    /// Pull the text message out of an envelope. Receipts, typing
    /// notifications and attachments without text yield `None`.
    pub fn from_incoming(msg: &IncomingMessage) -> Option<Self> {
        let data = msg.envelope.data_message.as_ref()?;
        let text = data.message.clone().filter(|t| !t.trim().is_empty())?;

        Some(Self {
            author: msg.envelope.source.clone(),
            author_name: msg.envelope.source_name.clone(),
            text,
            timestamp: msg.envelope.timestamp,
            group_id: data.group_info.as_ref().map(|g| g.group_id.clone()),
        })
    }

    pub fn is_group(&self) -> bool {
        self.group_id.is_some()
    }

    /// Where a reply goes: the group, or the author for direct messages.
    pub fn reply_target(&self) -> &str {
        self.group_id.as_deref().unwrap_or(&self.author)
    }

    /// When the message was sent.
    pub fn sent_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
