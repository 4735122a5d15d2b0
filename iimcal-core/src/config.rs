//! Process configuration.
//!
//! Loaded once at startup and passed into the fetcher; nothing reads
//! the environment after this point.

use crate::error::{IimcalError, IimcalResult};

const SHEET_ID_VAR: &str = "GOOGLE_SHEET_ID";

/// Immutable configuration for one server process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Sheet document id the calendars are read from.
    pub sheet_id: String,
}

impl Config {
    pub fn new(sheet_id: impl Into<String>) -> IimcalResult<Self> {
        let sheet_id = sheet_id.into();
        if sheet_id.trim().is_empty() {
            return Err(IimcalError::Config("sheet id is empty".to_string()));
        }
        Ok(Self { sheet_id })
    }

    /// Load config from the process environment.
    pub fn from_env() -> IimcalResult<Self> {
        let sheet_id = std::env::var(SHEET_ID_VAR)
            .map_err(|_| IimcalError::Config(format!("{SHEET_ID_VAR} is not set")))?;
        Self::new(sheet_id)
    }
}
