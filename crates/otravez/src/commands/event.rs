//! Event command - Statbotics summary of an event.

use crate::commands::{Args, Card, CommandHandler, CommandInfo, Param, ParamKind};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use signal_client::ChatMessage;
use statbotics_client::{Event, StatboticsClient};
use std::fmt::Display;
use std::sync::Arc;
use tba_client::event_key;

static INFO: CommandInfo = CommandInfo {
    name: "event",
    aliases: &[],
    description: "Show information about an event. Defaults to the current year.",
    params: &[Param::required("event", ParamKind::EventCode), Param::current_year()],
};

pub struct EventHandler {
    statbotics: Arc<StatboticsClient>,
}

impl EventHandler {
    pub fn new(statbotics: Arc<StatboticsClient>) -> Self {
        Self { statbotics }
    }
}

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

pub(crate) fn render_event(code: &str, year: i32, event: &Event) -> String {
    Card::new(&event.name)
        .field("Type", or_na(event.event_type.as_ref()))
        .field("Week", or_na(event.week))
        .field("District", or_na(event.district.as_deref()))
        .field("Quals", or_na(event.qual_matches))
        .field("Teams", or_na(event.num_teams))
        .field(
            "FirstInspires",
            format!("<https://frc-events.firstinspires.org/{}/{}>", year, code),
        )
        .field_opt("Stream", event.stream().map(|url| format!("<{}>", url)))
        .render()
}

#[async_trait]
impl CommandHandler for EventHandler {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn execute(&self, _message: &ChatMessage, args: &Args) -> AppResult<String> {
        let code = args
            .text("event")
            .ok_or(AppError::MissingArgument("event"))?
            .to_lowercase();
        let year = args.year("year").ok_or(AppError::MissingArgument("year"))?;

        let event = self.statbotics.event(&event_key(year, &code)).await?;
        Ok(render_event(&code, year, &event))
    }
}
