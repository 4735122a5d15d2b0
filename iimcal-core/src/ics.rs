//! ICS document generation.

use chrono::Utc;
use icalendar::{Calendar, Component, EventLike};

use crate::event::Event;
use crate::row::CALENDAR_DOMAIN;

/// Render a complete VCALENDAR document for one section.
///
/// Pure in everything except DTSTAMP, which is stamped with the render
/// time as RFC 5545 requires. Events appear in input order.
pub fn generate_ics(calendar_id: &str, events: &[Event]) -> String {
    let mut cal = Calendar::new();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&qualified_uid(&event.uid));
        ics_event.summary(&event.summary);
        ics_event.description(&event.description);
        ics_event.location(&event.location);

        let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);

        ics_event.starts(event.start);
        ics_event.ends(event.end);

        cal.push(ics_event.done());
    }

    set_prodid(&cal.done().to_string(), calendar_id)
}

/// Event uid with the calendar domain appended, unless the id already
/// carries it.
pub fn qualified_uid(uid: &str) -> String {
    let suffix = format!("@{CALENDAR_DOMAIN}");
    if uid.ends_with(&suffix) {
        uid.to_string()
    } else {
        format!("{uid}{suffix}")
    }
}

/// Rewrite the icalendar crate's default PRODID with ours, which names
/// the section the document was generated for.
fn set_prodid(ics: &str, calendar_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!(
                "PRODID:-//IIMCal//{} Calendar//EN",
                calendar_id.to_uppercase()
            ));
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}
