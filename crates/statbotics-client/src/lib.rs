//! Client for the Statbotics v3 API (EPA and event statistics).

mod client;
mod error;
mod types;

pub use client::{StatboticsClient, DEFAULT_BASE_URL};
pub use error::StatboticsError;
pub use types::*;
