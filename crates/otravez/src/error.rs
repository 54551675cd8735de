//! Application error types.

use crate::commands::{DataUnavailableError, UsageError};
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Startup failed: {0:#}")]
    Startup(#[from] anyhow::Error),

    #[error("Signal API not reachable at {0}")]
    SignalUnreachable(String),

    #[error("{0}")]
    Usage(#[from] UsageError),

    #[error("Argument '{0}' was not bound")]
    MissingArgument(&'static str),

    #[error("Command name '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("TBA error: {0}")]
    Tba(#[from] tba_client::TbaError),

    #[error("Statbotics error: {0}")]
    Statbotics(#[from] statbotics_client::StatboticsError),

    #[error("Weather error: {0}")]
    Weather(#[from] weather_client::WeatherError),

    #[error("{0}")]
    DataUnavailable(#[from] DataUnavailableError),
}

impl AppError {
    /// The upstream had no record of the requested team or event.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Tba(tba_client::TbaError::NotFound(_))
                | AppError::Statbotics(statbotics_client::StatboticsError::NotFound(_))
                | AppError::Weather(weather_client::WeatherError::NotFound(_))
                | AppError::DataUnavailable(DataUnavailableError::UnknownTeam(_))
        )
    }

    /// Text shown to the chat user, or `None` when the error should only
    /// be logged and answered generically.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AppError::Usage(e) => Some(e.to_string()),
            _ if self.is_not_found() => Some(
                "Couldn't find that. Double-check the team number or event code.".into(),
            ),
            _ => None,
        }
    }
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_startup_errors_keep_their_cause() {
        let err: AppError = Err::<(), _>(anyhow::anyhow!("missing field `auth_key`"))
            .context("Failed to load configuration")
            .unwrap_err()
            .into();
        assert_eq!(
            err.to_string(),
            "Startup failed: Failed to load configuration: missing field `auth_key`"
        );

        let err = AppError::SignalUnreachable("http://localhost:8080".into());
        assert_eq!(err.to_string(), "Signal API not reachable at http://localhost:8080");
        assert!(err.user_message().is_none());
    }
}
