//! EPA command - a team's Statbotics EPA at an event.

use crate::commands::{percent, Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use statbotics_client::{StatboticsClient, TeamEvent};
use std::sync::Arc;
use tba_client::event_key;

static INFO: CommandInfo = CommandInfo {
    name: "epa",
    aliases: &[],
    description: "Show a team's EPA at an event. Defaults to the current year.",
    params: &[
        Param::required("team", ParamKind::Team),
        Param::required("event", ParamKind::EventCode),
        Param::current_year(),
    ],
};

pub struct EpaHandler {
    statbotics: Arc<StatboticsClient>,
}

impl EpaHandler {
    pub fn new(statbotics: Arc<StatboticsClient>) -> Self {
        Self { statbotics }
    }
}

pub(crate) fn render_epa(team: u32, year: i32, team_event: &TeamEvent) -> String {
    Card::new(format!("{} at {} in {}", team, team_event.event_name, year))
        .field("EPA", team_event.epa.breakdown.total_points)
        .field("Win Rate", format!("{}%", percent(team_event.record.total.winrate)))
        .render()
}

#[async_trait]
impl CommandHandler for EpaHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let team = args.team("team").ok_or(AppError::MissingArgument("team"))?;
        let event = args.text("event").ok_or(AppError::MissingArgument("event"))?;
        let year = args.year("year").ok_or(AppError::MissingArgument("year"))?;

        let team_event = self
            .statbotics
            .team_event(team, &event_key(year, event))
            .await?;

        Ok(render_epa(team, year, &team_event))
    }
}
