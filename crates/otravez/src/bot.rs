//! Message dispatch: command table lookup, argument binding and replies.

use crate::commands::{parse_invocation, Args, CommandRegistry};
use crate::error::AppError;
use chrono::{Datelike, Utc};
use signal_client::{ChatMessage, ChatTransport};
use tracing::{debug, error, info, instrument};

/// Reply used when a handler fails for a reason the user can't act on.
pub const GENERIC_FAILURE: &str = "Sorry, something went wrong.";

pub struct Bot {
    prefix: String,
    commands: CommandRegistry,
}

impl Bot {
    pub fn new(prefix: impl Into<String>, commands: CommandRegistry) -> Self {
        Self {
            prefix: prefix.into(),
            commands,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Work out the reply for a message. `None` means the message is not
    /// addressed to a known command and gets no answer.
    #[instrument(skip_all, fields(author = %message.author))]
    pub async fn respond(&self, message: &ChatMessage) -> Option<String> {
        let invocation = parse_invocation(&self.prefix, &message.text)?;

        let Some(handler) = self.commands.get(&invocation.name) else {
            debug!(command = %invocation.name, "Unknown command");
            return None;
        };

        let command = handler.info();
        info!(command = command.name, args = ?invocation.tokens, "Running command");

        let result = match Args::bind(command, &invocation.tokens, Utc::now().year()) {
            Ok(args) => handler.execute(message, &args).await,
            Err(e) => Err(AppError::from(e)),
        };

        Some(match result {
            Ok(reply) => reply,
            Err(e) => e.user_message().unwrap_or_else(|| {
                error!(command = command.name, "Handler error: {}", e);
                GENERIC_FAILURE.into()
            }),
        })
    }

    /// Respond to `message` through `transport`. Send failures are logged.
    pub async fn process(&self, transport: &dyn ChatTransport, message: &ChatMessage) {
        if let Some(reply) = self.respond(message).await {
            if let Err(e) = transport.reply(message, &reply).await {
                error!("Failed to send reply: {}", e);
            }
        }
    }
}
