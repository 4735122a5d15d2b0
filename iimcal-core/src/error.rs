//! Error types for the iimcal pipeline.

use thiserror::Error;

/// Errors that can occur while building a calendar.
#[derive(Error, Debug)]
pub enum IimcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Row error: {0}")]
    Row(String),
}

/// Result type alias for iimcal operations.
pub type IimcalResult<T> = Result<T, IimcalError>;
