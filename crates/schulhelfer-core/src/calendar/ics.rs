//! Calendar File Export
//!
//! Builds a single-event `.ics` attachment for the selected Anlass.

use chrono::Utc;
use icalendar::{Calendar, CalendarDateTime, Component, Event as IcsEvent, EventLike};

use super::parse::EventSchedule;
use crate::domain::{DateParseError, Event};

pub const TZ: chrono_tz::Tz = chrono_tz::Europe::Zurich;
pub const DEFAULT_LOCATION: &str = "Primarstufe Rittergasse, Basel";
pub const MIME_TYPE: &str = "text/calendar;charset=utf-8";

/// Ready-to-download calendar attachment
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarFile {
    pub file_name: String,
    pub content: String,
}

#[must_use]
pub fn create_calendar(event: &Event, schedule: &EventSchedule, location: &str) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.name("Schulhelfer");
    calendar.timezone(TZ.name());

    let mut description = String::new();
    if let Some(text) = event.description_text() {
        description.push_str(text);
        description.push_str("\n\n");
    }
    description.push_str(&format!("Helfereinsatz: {}", event.name));

    let mut entry = IcsEvent::new();
    entry
        .uid(&format!("schulhelfer-{}-{}", event.id, schedule.start.format("%Y%m%dT%H%M")))
        .timestamp(Utc::now())
        .summary(&format!("Schulhelfer: {}", event.name))
        .description(&description)
        .location(location)
        .starts(CalendarDateTime::WithTimezone {
            date_time: schedule.start,
            tzid: TZ.name().to_string(),
        })
        .ends(CalendarDateTime::WithTimezone {
            date_time: schedule.end,
            tzid: TZ.name().to_string(),
        });

    calendar.push(entry);
    calendar
}

/// Parse the event's displayed date/time and render the attachment.
pub fn calendar_file(event: &Event, location: &str) -> Result<CalendarFile, DateParseError> {
    let schedule = EventSchedule::from_texts(&event.date, event.time_text())?;
    let calendar = create_calendar(event, &schedule, location);
    Ok(CalendarFile {
        file_name: format!("schulhelfer-{}.ics", slugify(&event.name)),
        content: calendar.to_string(),
    })
}

/// Lowercase ASCII file-name stem; umlauts transliterated
fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.to_lowercase().chars() {
        match c {
            'ä' => slug.push_str("ae"),
            'ö' => slug.push_str("oe"),
            'ü' => slug.push_str("ue"),
            'ß' => slug.push_str("ss"),
            c if c.is_ascii_alphanumeric() => slug.push(c),
            _ if !slug.ends_with('-') && !slug.is_empty() => slug.push('-'),
            _ => {}
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "anlass".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, time: Option<&str>) -> Event {
        Event {
            id: "42".into(),
            name: "Sporttag Zürich".into(),
            date: date.into(),
            time: time.map(str::to_string),
            free_slots: 3,
            current_helpers: 1,
            max_helpers: 4,
            description: Some("Posten".into()),
        }
    }

    #[test]
    fn test_calendar_file_default_time() {
        let file = calendar_file(&event("Montag, 15. Juli 2025", None), DEFAULT_LOCATION).unwrap();
        assert_eq!(file.file_name, "schulhelfer-sporttag-zuerich.ics");
        assert!(file.content.contains("BEGIN:VCALENDAR"));
        assert!(file.content.contains("BEGIN:VEVENT"));
        assert!(file.content.contains("DTSTART;TZID=Europe/Zurich:20250715T100000"));
        assert!(file.content.contains("DTEND;TZID=Europe/Zurich:20250715T120000"));
        assert!(file.content.contains("SUMMARY:Schulhelfer: Sporttag Zürich"));
        assert!(file.content.contains("LOCATION:"));
        assert!(file.content.contains("DTSTAMP:"));
    }

    #[test]
    fn test_calendar_file_with_time_range() {
        let file = calendar_file(&event("15. Juli 2025", Some("14:00-17:30")), DEFAULT_LOCATION).unwrap();
        assert!(file.content.contains("DTSTART;TZID=Europe/Zurich:20250715T140000"));
        assert!(file.content.contains("DTEND;TZID=Europe/Zurich:20250715T173000"));
    }

    #[test]
    fn test_unparseable_date_aborts() {
        assert!(calendar_file(&event("irgendwann", None), DEFAULT_LOCATION).is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Znüni & Zvieri!"), "znueni-zvieri");
        assert_eq!(slugify("!!!"), "anlass");
    }
}
