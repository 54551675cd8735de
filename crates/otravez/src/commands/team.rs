//! Team command - general information about a team.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::{TbaClient, Team};

static INFO: CommandInfo = CommandInfo {
    name: "team",
    aliases: &["info"],
    description: "Get information about a team.",
    params: &[Param::required("team", ParamKind::Team)],
};

pub struct TeamHandler {
    tba: Arc<TbaClient>,
}

impl TeamHandler {
    pub fn new(tba: Arc<TbaClient>) -> Self {
        Self { tba }
    }
}

pub(crate) fn render_team(number: u32, team: &Team) -> String {
    Card::new(format!("FRC Team {}", number))
        .url(format!("https://www.thebluealliance.com/team/{}", number))
        .field("Name", team.nickname.as_deref().unwrap_or("N/A"))
        .field("Location", team.location())
        .field("School", team.school_name.as_deref().unwrap_or("N/A"))
        .field_opt("Rookie Year", team.rookie_year)
        .field_opt("Website", team.website())
        .render()
}

#[async_trait]
impl CommandHandler for TeamHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let number = args.team("team").ok_or(AppError::MissingArgument("team"))?;
        let team = self.tba.team(number).await?;
        Ok(render_team(number, &team))
    }
}
