//! Leaderboard command - qualification rankings at an event.

use crate::commands::{percent, Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::{event_key, team_number, Ranking, TbaClient};

static INFO: CommandInfo = CommandInfo {
    name: "leaderboard",
    aliases: &[],
    description: "Show the rankings from an event. Defaults to the current year.",
    params: &[Param::required("event", ParamKind::EventCode), Param::current_year()],
};

pub struct LeaderboardHandler {
    tba: Arc<TbaClient>,
}

impl LeaderboardHandler {
    pub fn new(tba: Arc<TbaClient>) -> Self {
        Self { tba }
    }
}

pub(crate) fn render_rankings(key: &str, rankings: &[Ranking]) -> String {
    let lines = if rankings.is_empty() {
        "No rankings have been published yet.".to_string()
    } else {
        rankings
            .iter()
            .map(|r| {
                let record = r.record.unwrap_or_default();
                format!(
                    "{}. {} - winrate {}%",
                    r.rank,
                    team_number(&r.team_key),
                    percent(record.win_rate())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Card::new(format!("Rankings for {}", key))
        .description(lines)
        .render()
}

#[async_trait]
impl CommandHandler for LeaderboardHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let event = args.text("event").ok_or(AppError::MissingArgument("event"))?;
        let year = args.year("year").ok_or(AppError::MissingArgument("year"))?;

        let key = event_key(year, event);
        let rankings = self.tba.event_rankings(&key).await?;

        Ok(render_rankings(&key, &rankings))
    }
}
