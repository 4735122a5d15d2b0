//! The fixed set of served section calendars.

/// Calendar identifiers we serve, one per EPGP section. The identifier
/// doubles as the sheet tab name for that section's rows.
pub const VALID_CALENDARS: [&str; 6] = [
    "epgp17a", "epgp17b", "epgp17c", "epgp17d", "epgp17e", "epgp17f",
];

/// Whether `calendar_id` is one of the served section calendars.
pub fn is_valid_calendar(calendar_id: &str) -> bool {
    VALID_CALENDARS.contains(&calendar_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_calendars() {
        assert_eq!(VALID_CALENDARS.len(), 6);
        for calendar in VALID_CALENDARS {
            assert!(calendar.starts_with("epgp17"));
            assert_eq!(calendar.len(), 7);
        }
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(is_valid_calendar("epgp17a"));
        assert!(!is_valid_calendar("epgp17z"));
        assert!(!is_valid_calendar("EPGP17A"));
        assert!(!is_valid_calendar(""));
    }
}
