//! Fetching session rows from the Google Sheet.
//!
//! Each sheet tab is exported as CSV through the gviz endpoint, so no
//! Google API credentials are needed; the sheet only has to be
//! link-readable. Row-level parse failures are logged and skipped,
//! a failed fetch aborts the whole request.

use std::time::Duration;

use crate::config::Config;
use crate::error::{IimcalError, IimcalResult};
use crate::event::Event;
use crate::row::{RawRow, parse_row};

/// Tab holding the shared exam schedule, merged into every section's
/// calendar.
pub const EXAMS_TAB: &str = "EXAMS";

const SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only client for the source spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetClient {
    sheet_id: String,
    http: reqwest::Client,
}

impl SheetClient {
    pub fn new(config: &Config) -> IimcalResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            sheet_id: config.sheet_id.clone(),
            http,
        })
    }

    /// CSV export URL for one tab. Tab names are stored upper-case in
    /// the sheet regardless of how the calendar id is spelled.
    fn tab_url(&self, tab: &str) -> String {
        format!(
            "{SHEETS_BASE_URL}/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.sheet_id,
            tab.to_uppercase()
        )
    }

    /// Fetch one tab and parse its rows, in source order.
    pub async fn fetch_tab(&self, tab: &str) -> IimcalResult<Vec<Event>> {
        let url = self.tab_url(tab);
        tracing::debug!(tab, %url, "fetching sheet tab");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(IimcalError::Fetch(format!(
                "sheet tab '{tab}' returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(events_from_csv(&body))
    }

    /// All events for one calendar: the section's own tab followed by
    /// the shared exam tab, each in source row order.
    pub async fn calendar_events(&self, calendar_id: &str) -> IimcalResult<Vec<Event>> {
        let mut events = self.fetch_tab(calendar_id).await?;
        events.extend(self.fetch_tab(EXAMS_TAB).await?);
        Ok(events)
    }
}

/// Parse a CSV export into events. Buffer/holiday rows and malformed
/// rows are dropped (the latter with a warning); order is preserved.
pub fn events_from_csv(text: &str) -> Vec<Event> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut events = Vec::new();

    for record in reader.deserialize::<RawRow>() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(error = %e, "skipping undecodable row");
                continue;
            }
        };
        match parse_row(&row) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {} // buffer or holiday row
            Err(e) => {
                tracing::warn!(error = %e, ?row, "skipping invalid row");
            }
        }
    }

    events
}
