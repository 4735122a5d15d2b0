//! Normalized session events.
//!
//! One `Event` per class or exam session, produced from a spreadsheet
//! row by the row parser. All instants are UTC; the serializer never
//! has to think about timezones again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single class or exam session, normalized to UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier: `{code}-{section}-{session}@iimcal.sabid.in`.
    /// Deterministic so calendar clients can deduplicate across fetches.
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
