//! Weather client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("No current conditions in weather report")]
    EmptyReport,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}
