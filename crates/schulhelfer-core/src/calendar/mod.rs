//! Calendar
//!
//! Date text parsing, countdowns and `.ics` generation.

mod countdown;
mod ics;
mod parse;

pub use countdown::{countdown_label, days_until};
pub use ics::{calendar_file, create_calendar, CalendarFile, DEFAULT_LOCATION, MIME_TYPE, TZ};
pub use parse::{parse_german_date, parse_time_range, EventSchedule, DEFAULT_DURATION_HOURS, DEFAULT_START};
