use std::sync::Arc;

use anyhow::Result;
use iimcal_core::{Config, SheetClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only client for the source spreadsheet; requests share it,
    /// nothing mutates after startup.
    pub sheets: Arc<SheetClient>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            sheets: Arc::new(SheetClient::new(config)?),
        })
    }
}
