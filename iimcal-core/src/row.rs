//! Spreadsheet row parsing.
//!
//! The source sheet is maintained by hand, so rows arrive loosely
//! formatted: month names may be abbreviated ("Mar") or written out
//! ("March"), fields carry stray whitespace, and blank buffer/holiday
//! rows sit between sessions to keep the grid readable. This module
//! turns one such row into a normalized UTC [`Event`], or says why it
//! could not.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{IimcalError, IimcalResult};
use crate::event::Event;

/// Domain suffix appended to every event uid.
pub const CALENDAR_DOMAIN: &str = "iimcal.sabid.in";

/// All sessions are held online; the sheet has no location column.
pub const DEFAULT_LOCATION: &str = "Online";

/// Accepted `Date` + `Time` formats, tried in order. The sheet mixes
/// abbreviated and full month names ("08-Mar-25" vs "08-March-25").
const DATE_TIME_FORMATS: [&str; 2] = ["%d-%b-%y %I:%M %p", "%d-%B-%y %I:%M %p"];

/// The word separating the two clock times in the `Time` column.
const TIME_RANGE_SEPARATOR: &str = "to";

/// Source times are IST, a fixed +05:30 ahead of UTC. No DST.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// One line of the sheet, keyed by column header.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    /// Section letter, "A" to "F".
    #[serde(rename = "Sec")]
    pub section: String,
    /// Course code, e.g. "EPGP-203". Empty on buffer/holiday rows.
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Course Name")]
    pub course_name: String,
    /// Session serial number. Empty on buffer/holiday rows.
    #[serde(rename = "Session")]
    pub session: String,
    /// e.g. "08-Mar-25".
    #[serde(rename = "Date")]
    pub date: String,
    /// e.g. "9:00 AM to 11:45 AM", in IST.
    #[serde(rename = "Time")]
    pub time: String,
}

/// Parse one row into an event.
///
/// Returns `Ok(None)` for buffer/holiday rows (empty course code or
/// session number) and `Err` for rows that claim to be sessions but
/// cannot be parsed. Callers contain row errors; one bad row never
/// aborts the batch.
pub fn parse_row(row: &RawRow) -> IimcalResult<Option<Event>> {
    if row.code.trim().is_empty() || row.session.trim().is_empty() {
        return Ok(None);
    }

    let date = row.date.trim();
    let (start_clock, end_clock) = split_time_range(&row.time)?;

    let start = parse_ist(date, start_clock)?;
    let end = parse_ist(date, end_clock)?;
    if start >= end {
        return Err(IimcalError::Row(format!(
            "session ends at or before its start ({} on {date})",
            row.time.trim()
        )));
    }

    let summary = row.course_name.trim().to_string();
    Ok(Some(Event {
        uid: format!(
            "{}-{}-{}@{CALENDAR_DOMAIN}",
            row.code.trim(),
            row.section.trim(),
            row.session.trim()
        ),
        summary: summary.clone(),
        // The sheet has no separate description column.
        description: summary,
        location: DEFAULT_LOCATION.to_string(),
        start,
        end,
    }))
}

/// Split "9:00 AM to 11:45 AM" into its two clock times.
fn split_time_range(time: &str) -> IimcalResult<(&str, &str)> {
    let (start, end) = time.split_once(TIME_RANGE_SEPARATOR).ok_or_else(|| {
        IimcalError::Row(format!(
            "time range '{}' has no '{TIME_RANGE_SEPARATOR}' separator",
            time.trim()
        ))
    })?;
    Ok((start.trim(), end.trim()))
}

/// Parse a date + clock-time pair as IST wall-clock and convert to UTC.
fn parse_ist(date: &str, clock: &str) -> IimcalResult<DateTime<Utc>> {
    let text = format!("{date} {clock}");
    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, format) {
            return to_utc(naive);
        }
    }
    Err(IimcalError::Row(format!(
        "date/time '{text}' matches none of the accepted formats"
    )))
}

fn to_utc(naive: NaiveDateTime) -> IimcalResult<DateTime<Utc>> {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS)
        .ok_or_else(|| IimcalError::Row("invalid IST offset".to_string()))?;
    ist.from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| IimcalError::Row(format!("ambiguous local time '{naive}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row() -> RawRow {
        RawRow {
            section: "A".to_string(),
            code: "EPGP-203".to_string(),
            course_name: "Economic Environment (EE)".to_string(),
            session: "1".to_string(),
            date: "08-Mar-25".to_string(),
            time: "9:00 AM to 11:45 AM".to_string(),
        }
    }

    #[test]
    fn test_parse_known_row() {
        let event = parse_row(&make_row()).unwrap().unwrap();

        assert_eq!(event.uid, "EPGP-203-A-1@iimcal.sabid.in");
        assert_eq!(event.summary, "Economic Environment (EE)");
        assert_eq!(event.description, event.summary);
        assert_eq!(event.location, "Online");
        // 9:00 AM / 11:45 AM IST minus 5:30
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 8, 3, 30, 0).unwrap());
        assert_eq!(event.end, Utc.with_ymd_and_hms(2025, 3, 8, 6, 15, 0).unwrap());
    }

    #[test]
    fn test_full_month_name_parses_identically() {
        let abbreviated = parse_row(&make_row()).unwrap().unwrap();

        let mut row = make_row();
        row.date = "08-March-25".to_string();
        let full = parse_row(&row).unwrap().unwrap();

        assert_eq!(abbreviated, full);
    }

    #[test]
    fn test_uid_is_deterministic_and_trimmed() {
        let mut row = make_row();
        row.code = " EPGP-203 ".to_string();
        row.section = " A".to_string();
        row.session = "1 ".to_string();

        let first = parse_row(&row).unwrap().unwrap();
        let second = parse_row(&row).unwrap().unwrap();

        assert_eq!(first.uid, "EPGP-203-A-1@iimcal.sabid.in");
        assert_eq!(first.uid, second.uid);
    }

    #[test]
    fn test_empty_code_is_a_skip() {
        let mut row = make_row();
        row.code = "".to_string();
        assert!(parse_row(&row).unwrap().is_none());
    }

    #[test]
    fn test_empty_session_is_a_skip() {
        let mut row = make_row();
        row.session = "  ".to_string();
        assert!(parse_row(&row).unwrap().is_none());
    }

    #[test]
    fn test_skip_even_when_date_is_blank() {
        // Holiday rows usually have no date either; they must still be
        // skips, never parse errors.
        let mut row = make_row();
        row.code = "".to_string();
        row.date = "".to_string();
        row.time = "".to_string();
        assert!(parse_row(&row).unwrap().is_none());
    }

    #[test]
    fn test_unparseable_date_is_a_row_error() {
        let mut row = make_row();
        row.date = "2025/03/08".to_string();
        let err = parse_row(&row).unwrap_err();
        assert!(matches!(err, IimcalError::Row(_)));
    }

    #[test]
    fn test_missing_time_separator_is_a_row_error() {
        let mut row = make_row();
        row.time = "9:00 AM - 11:45 AM".to_string();
        let err = parse_row(&row).unwrap_err();
        assert!(matches!(err, IimcalError::Row(_)));
    }

    #[test]
    fn test_inverted_time_range_is_a_row_error() {
        let mut row = make_row();
        row.time = "11:45 AM to 9:00 AM".to_string();
        let err = parse_row(&row).unwrap_err();
        assert!(matches!(err, IimcalError::Row(_)));
    }

    #[test]
    fn test_start_strictly_precedes_end() {
        let event = parse_row(&make_row()).unwrap().unwrap();
        assert!(event.start < event.end);
    }

    #[test]
    fn test_afternoon_times_cross_into_pm() {
        let mut row = make_row();
        row.time = "2:00 PM to 4:45 PM".to_string();
        let event = parse_row(&row).unwrap().unwrap();
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 8, 8, 30, 0).unwrap());
        assert_eq!(event.end, Utc.with_ymd_and_hms(2025, 3, 8, 11, 15, 0).unwrap());
    }
}
