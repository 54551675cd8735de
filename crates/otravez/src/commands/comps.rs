//! Comps command - events a team attended in a season.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::{Event, TbaClient};

static INFO: CommandInfo = CommandInfo {
    name: "comps",
    aliases: &[],
    description: "List the competitions a team attended. Defaults to the current year.",
    params: &[Param::required("team", ParamKind::Team), Param::current_year()],
};

pub struct CompsHandler {
    tba: Arc<TbaClient>,
}

impl CompsHandler {
    pub fn new(tba: Arc<TbaClient>) -> Self {
        Self { tba }
    }
}

pub(crate) fn render_comps(team: u32, year: i32, events: &[Event]) -> String {
    Card::new(format!("{} attended {} events in {}", team, events.len(), year))
        .description(
            events
                .iter()
                .map(|e| format!("{} ({})", e.display_name(), e.event_code))
                .collect::<Vec<_>>()
                .join("\n"),
        )
        .render()
}

#[async_trait]
impl CommandHandler for CompsHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let team = args.team("team").ok_or(AppError::MissingArgument("team"))?;
        let year = args.year("year").ok_or(AppError::MissingArgument("year"))?;

        let mut events = self.tba.team_events(team, year).await?;
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        Ok(render_comps(team, year, &events))
    }
}
