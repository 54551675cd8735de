//! Statbotics v3 response types. Only the fields the bot shows are decoded.

use serde::Deserialize;
use std::fmt;

/// A field Statbotics has served both as text and as a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => f.write_str(s),
        }
    }
}

/// `GET /team_event/{team}/{event}`
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEvent {
    pub team: u32,
    pub year: i32,
    pub event: String,
    pub event_name: String,
    pub epa: TeamEventEpa,
    pub record: TeamEventRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEventEpa {
    pub breakdown: EpaBreakdown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpaBreakdown {
    pub total_points: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEventRecord {
    pub qual: Option<Record>,
    pub elim: Option<Record>,
    pub total: Record,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub count: u32,
    /// Fraction in `0.0..=1.0`.
    #[serde(default)]
    pub winrate: f64,
}

/// `GET /event/{event}`
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub key: String,
    pub year: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: Option<Label>,
    pub week: Option<i32>,
    pub district: Option<String>,
    pub num_teams: Option<u32>,
    pub qual_matches: Option<u32>,
    pub video: Option<String>,
}

impl Event {
    /// Stream URL, when one is published.
    pub fn stream(&self) -> Option<&str> {
        self.video.as_deref().filter(|v| !v.is_empty())
    }
}
