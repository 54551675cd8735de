//! The Blue Alliance API v3 response types.

use serde::Deserialize;

/// Build a team key (`frc254`) from a team number.
pub fn team_key(team: u32) -> String {
    format!("frc{}", team)
}

/// Strip the `frc` prefix from a team key, if present.
pub fn team_number(key: &str) -> &str {
    key.strip_prefix("frc").unwrap_or(key)
}

/// Build an event key (`2024casj`) from a year and event code.
pub fn event_key(year: i32, code: &str) -> String {
    format!("{}{}", year, code.to_lowercase())
}

/// `GET /team/{team_key}`
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub key: String,
    pub team_number: u32,
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub school_name: Option<String>,
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub rookie_year: Option<i32>,
}

impl Team {
    /// `city, state, country`, skipping missing or empty parts.
    pub fn location(&self) -> String {
        [&self.city, &self.state_prov, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Website, when one is listed.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref().filter(|w| !w.is_empty())
    }
}

/// `GET /team/{team_key}/events/{year}`
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub key: String,
    pub name: String,
    pub short_name: Option<String>,
    pub event_code: String,
    pub year: i32,
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Event {
    /// Short name if TBA has one, otherwise the full name.
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }
}

/// `GET /event/{event_key}/rankings`
#[derive(Debug, Clone, Deserialize)]
pub struct EventRankings {
    #[serde(default)]
    pub rankings: Vec<Ranking>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ranking {
    pub rank: u32,
    pub team_key: String,
    pub record: Option<WinLossRecord>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl WinLossRecord {
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Fraction of matches won, 0 when none were played.
    pub fn win_rate(&self) -> f64 {
        match self.matches_played() {
            0 => 0.0,
            played => f64::from(self.wins) / f64::from(played),
        }
    }
}

/// `GET /team/{team_key}/awards[/{year}]`
#[derive(Debug, Clone, Deserialize)]
pub struct Award {
    pub name: String,
    pub award_type: i32,
    pub event_key: String,
    pub year: i32,
}

/// `GET /event/{event_key}/alliances`
#[derive(Debug, Clone, Deserialize)]
pub struct Alliance {
    pub name: Option<String>,
    #[serde(default)]
    pub picks: Vec<String>,
    pub status: Option<AllianceStatus>,
}

impl Alliance {
    pub fn won(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.status == "won")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllianceStatus {
    pub status: String,
    pub level: Option<String>,
}

/// `GET /status`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub current_season: i32,
    pub max_season: i32,
    pub is_datafeed_down: bool,
}
