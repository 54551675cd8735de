//! Ping command - checks the bot is up and reports response time.

use crate::commands::{Args, CommandHandler, CommandInfo};
use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use signal_client::ChatMessage;

static INFO: CommandInfo = CommandInfo {
    name: "ping",
    aliases: &[],
    description: "Check that the bot is online and measure response time.",
    params: &[],
};

#[derive(Default)]
pub struct PingHandler;

impl PingHandler {
    pub fn new() -> Self {
        Self
    }
}

/// Milliseconds between sending and handling; clock skew clamps to zero.
pub(crate) fn latency_ms(sent_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - sent_at).num_milliseconds().max(0)
}

#[async_trait]
impl CommandHandler for PingHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, message: &ChatMessage, _args: &Args) -> AppResult<String> {
        let delay = latency_ms(message.sent_at(), Utc::now());
        Ok(format!("pong! {}ms", delay))
    }
}
