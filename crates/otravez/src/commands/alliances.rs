//! Alliances command - playoff alliances at an event.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::{event_key, team_number, Alliance, TbaClient};

static INFO: CommandInfo = CommandInfo {
    name: "alliances",
    aliases: &[],
    description: "Show the playoff alliances from an event. Defaults to the current year.",
    params: &[Param::required("event", ParamKind::EventCode), Param::current_year()],
};

pub struct AlliancesHandler {
    tba: Arc<TbaClient>,
}

impl AlliancesHandler {
    pub fn new(tba: Arc<TbaClient>) -> Self {
        Self { tba }
    }
}

pub(crate) fn render_alliances(alliances: &[Alliance]) -> String {
    let listing = if alliances.is_empty() {
        "No alliances have been selected yet.".to_string()
    } else {
        alliances
            .iter()
            .enumerate()
            .map(|(i, alliance)| {
                let picks = alliance
                    .picks
                    .iter()
                    .map(|p| team_number(p))
                    .collect::<Vec<_>>()
                    .join(", ");
                let won = if alliance.won() { " (**won**)" } else { "" };
                format!("{}. {}{}", i + 1, picks, won)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Card::new("Alliances").description(listing).render()
}

#[async_trait]
impl CommandHandler for AlliancesHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let event = args.text("event").ok_or(AppError::MissingArgument("event"))?;
        let year = args.year("year").ok_or(AppError::MissingArgument("year"))?;

        let alliances = self.tba.event_alliances(&event_key(year, event)).await?;
        Ok(render_alliances(&alliances))
    }
}
