//! Core pipeline for the IIMK EPGP section calendars.
//!
//! Turns rows of a shared Google Sheet into iCalendar documents:
//! - `row` parses one spreadsheet row into a normalized UTC [`Event`]
//! - `sheet` fetches a tab's CSV export and drives the row parser
//! - `ics` renders an event list as a VCALENDAR document
//!
//! The HTTP surface lives in the `iimcal-server` binary; this crate is
//! everything behind it.

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod row;
pub mod sections;
pub mod sheet;

pub use config::Config;
pub use error::{IimcalError, IimcalResult};
pub use event::Event;
pub use sheet::SheetClient;
