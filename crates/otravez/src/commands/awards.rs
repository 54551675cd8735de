//! Awards command - a team's awards, all-time or for one season.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use std::sync::Arc;
use tba_client::{Award, TbaClient};

/// Once the list reaches this many characters the rest is summarised.
const MAX_LISTING_CHARS: usize = 1000;

static INFO: CommandInfo = CommandInfo {
    name: "awards",
    aliases: &["acolades"],
    description: "List a team's awards. Without a year, lists every award.",
    params: &[
        Param::required("team", ParamKind::Team),
        Param::optional("year", ParamKind::Year),
    ],
};

pub struct AwardsHandler {
    tba: Arc<TbaClient>,
}

impl AwardsHandler {
    pub fn new(tba: Arc<TbaClient>) -> Self {
        Self { tba }
    }
}

pub(crate) fn award_listing(awards: &[Award]) -> String {
    let mut listing = String::new();

    for (i, award) in awards.iter().enumerate() {
        if listing.len() >= MAX_LISTING_CHARS {
            listing.push_str(&format!("\n...and {} more.", awards.len() - i));
            break;
        }
        listing.push_str(&format!("\n- {} ({})", award.name, award.year));
    }

    listing.trim_start().to_string()
}

pub(crate) fn render_awards(team: u32, year: Option<i32>, awards: &[Award]) -> String {
    let title = match year {
        Some(year) => format!("{}'s awards in {}", team, year),
        None => format!("{}'s awards", team),
    };

    let listing = if awards.is_empty() {
        "No awards on record.".to_string()
    } else {
        award_listing(awards)
    };

    Card::new(title).description(listing).render()
}

#[async_trait]
impl CommandHandler for AwardsHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let team = args.team("team").ok_or(AppError::MissingArgument("team"))?;
        let year = args.year("year");

        let awards = self.tba.team_awards(team, year).await?;
        Ok(render_awards(team, year, &awards))
    }
}
