//! Years command - the seasons a team competed in, as compact ranges.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::{TbaClient, TbaError};
use thiserror::Error;
use tracing::debug;

static INFO: CommandInfo = CommandInfo {
    name: "years",
    aliases: &[],
    description: "List the seasons a team competed in.",
    params: &[Param::required("team", ParamKind::Team)],
};

/// The provider could not supply a team's seasons.
#[derive(Error, Debug)]
pub enum DataUnavailableError {
    #[error("Unknown team {0}")]
    UnknownTeam(u32),

    #[error("Data provider unavailable: {0}")]
    Provider(#[source] TbaError),
}

/// Source of the seasons a team was active in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActiveYears: Send + Sync {
    async fn active_years(&self, team: u32) -> Result<Vec<i32>, DataUnavailableError>;
}

#[async_trait]
impl ActiveYears for TbaClient {
    async fn active_years(&self, team: u32) -> Result<Vec<i32>, DataUnavailableError> {
        self.years_participated(team).await.map_err(|e| match e {
            TbaError::NotFound(_) => DataUnavailableError::UnknownTeam(team),
            other => DataUnavailableError::Provider(other),
        })
    }
}

pub struct YearsHandler {
    source: Arc<dyn ActiveYears>,
}

impl YearsHandler {
    pub fn new(source: Arc<dyn ActiveYears>) -> Self {
        Self { source }
    }
}

pub(crate) fn render_years(team: u32, years: &[i32]) -> String {
    let ranges = year_ranges::compact(years.iter().copied());
    if ranges.is_empty() {
        return format!("{} has no recorded seasons.", team);
    }

    Card::new(format!(
        "FRC Team {} competed in {}",
        team,
        year_ranges::format_default(&ranges)
    ))
    .render()
}

#[async_trait]
impl CommandHandler for YearsHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let team = args.team("team").ok_or(AppError::MissingArgument("team"))?;
        let years = self.source.active_years(team).await?;
        debug!(team, seasons = years.len(), "Fetched active years");

        Ok(render_years(team, &years))
    }
}
