//! Bot command handlers and the command table.

mod alliances;
mod args;
mod awards;
mod card;
mod comps;
mod epa;
mod event;
mod help;
mod leaderboard;
mod ping;
mod registry;
mod team;
mod weather;
mod years;

pub use alliances::AlliancesHandler;
pub use args::{parse_invocation, ArgValue, Args, Invocation, UsageError};
pub use awards::AwardsHandler;
pub use card::{percent, Card};
pub use comps::CompsHandler;
pub use epa::EpaHandler;
pub use event::EventHandler;
pub use help::HelpHandler;
pub use leaderboard::LeaderboardHandler;
pub use ping::PingHandler;
pub use registry::CommandRegistry;
pub use team::TeamHandler;
pub use weather::WeatherHandler;
pub use years::{ActiveYears, DataUnavailableError, YearsHandler};

use crate::error::AppResult;
use async_trait::async_trait;
use signal_client::ChatMessage;

/// How a parameter's token is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A positive team number.
    Team,
    /// A season, e.g. `2024`.
    Year,
    /// An alphanumeric event code, e.g. `casj`.
    EventCode,
}

/// What happens when a parameter is not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Required,
    Optional,
    /// The current UTC year at invocation time.
    CurrentYear,
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: ParamDefault,
}

impl Param {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            default: ParamDefault::Required,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            default: ParamDefault::Optional,
        }
    }

    pub const fn current_year() -> Self {
        Self {
            name: "year",
            kind: ParamKind::Year,
            default: ParamDefault::CurrentYear,
        }
    }

    /// `<team>` or `[year]`.
    pub fn usage(&self) -> String {
        match self.default {
            ParamDefault::Required => format!("<{}>", self.name),
            ParamDefault::Optional | ParamDefault::CurrentYear => format!("[{}]", self.name),
        }
    }
}

/// Declared shape of a command: its names and parameter schema.
#[derive(Debug)]
pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub params: &'static [Param],
}

impl CommandInfo {
    /// `team <team>` style usage line, without the prefix.
    pub fn usage(&self) -> String {
        std::iter::once(self.name.to_string())
            .chain(self.params.iter().map(Param::usage))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The command's declared schema.
    fn info(&self) -> &'static CommandInfo;

    /// Execute the command with arguments already bound to the schema.
    async fn execute(&self, message: &ChatMessage, args: &Args) -> AppResult<String>;
}
