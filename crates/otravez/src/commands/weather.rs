//! Weather command - current weather where a team is based.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::TbaClient;
use tracing::debug;
use weather_client::{CurrentCondition, WeatherClient};

static INFO: CommandInfo = CommandInfo {
    name: "weather",
    aliases: &[],
    description: "Fetch the weather for a team's location.",
    params: &[Param::required("team", ParamKind::Team)],
};

pub struct WeatherHandler {
    tba: Arc<TbaClient>,
    weather: Arc<WeatherClient>,
}

impl WeatherHandler {
    pub fn new(tba: Arc<TbaClient>, weather: Arc<WeatherClient>) -> Self {
        Self { tba, weather }
    }
}

pub(crate) fn render_weather(team: u32, current: &CurrentCondition) -> String {
    Card::new(format!("{}'s Weather", team))
        .description(format!(
            "It's a {} {} degrees celsius for them!",
            current.description().to_lowercase(),
            current.temp_c
        ))
        .render()
}

#[async_trait]
impl CommandHandler for WeatherHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let number = args.team("team").ok_or(AppError::MissingArgument("team"))?;
        let team = self.tba.team(number).await?;

        let parts = [&team.city, &team.state_prov, &team.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect::<Vec<_>>();
        debug!(team = number, location = ?parts, "Looking up weather");

        let current = self.weather.current(&parts).await?;
        Ok(render_weather(number, &current))
    }
}
