//! Help command - lists every command in the table.

use crate::commands::{Args, CommandHandler, CommandInfo};
use crate::error::AppResult;
use async_trait::async_trait;
use signal_client::ChatMessage;

pub(crate) static INFO: CommandInfo = CommandInfo {
    name: "help",
    aliases: &[],
    description: "Show this message.",
    params: &[],
};

pub struct HelpHandler {
    text: String,
}

impl HelpHandler {
    /// Build the help text once from the registered command infos.
    pub fn new(prefix: &str, infos: &[&'static CommandInfo]) -> Self {
        let mut text = String::from(
            "**OtraVez**\nA simple bot for getting FRC information about teams, events, and more.\n\n**Commands:**",
        );

        for info in infos.iter().copied().chain(std::iter::once(&INFO)) {
            text.push_str(&format!("\n- {}{} - {}", prefix, info.usage(), info.description));
            if !info.aliases.is_empty() {
                text.push_str(&format!(" (also: {})", info.aliases.join(", ")));
            }
        }

        text.push_str("\n\n<arg> is required, [arg] is optional. A missing [year] means this season.");
        Self { text }
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, _args: &Args) -> AppResult<String> {
        Ok(self.text.clone())
    }
}
