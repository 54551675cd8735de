//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The Blue Alliance configuration
    pub tba: TbaConfig,

    /// Statbotics configuration
    #[serde(default)]
    pub statbotics: StatboticsConfig,

    /// wttr.in configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Signal transport configuration
    pub signal: SignalConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TbaConfig {
    /// Read API key from thebluealliance.com/account
    pub auth_key: SecretString,

    #[serde(default = "default_tba_url")]
    pub base_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatboticsConfig {
    #[serde(default = "default_statbotics_url")]
    pub base_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub base_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Signal CLI REST API endpoint
    #[serde(default = "default_signal_service")]
    pub service_url: String,

    /// The bot's registered number
    pub phone_number: String,

    /// Poll interval for messages
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Command prefix
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for StatboticsConfig {
    fn default() -> Self {
        Self {
            base_url: default_statbotics_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            log_level: default_log_level(),
        }
    }
}

fn default_tba_url() -> String {
    tba_client::DEFAULT_BASE_URL.into()
}

fn default_statbotics_url() -> String {
    statbotics_client::DEFAULT_BASE_URL.into()
}

fn default_weather_url() -> String {
    weather_client::DEFAULT_BASE_URL.into()
}

fn default_signal_service() -> String {
    "http://signal-api:8080".into()
}

fn default_poll_interval() -> Duration {
    Duration::from_millis(500)
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_prefix() -> String {
    ";".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from the process environment (and `.env`).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env(None)
    }

    /// Build from `TBA__AUTH_KEY`-style variables. `vars` replaces the
    /// process environment when given.
    pub fn from_env(vars: Option<config::Map<String, String>>) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Phone numbers must stay strings ("+1..." would lose its sign)
                    .try_parsing(false)
                    .source(vars),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
