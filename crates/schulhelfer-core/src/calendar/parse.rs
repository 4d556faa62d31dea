//! German Date/Time Text Parsing
//!
//! Understands what the backend puts in `datum` and `zeit`:
//! "Montag, 15. Juli 2025", "15. Juli 2025", "15.07.2025" and
//! "14:00-16:00", "14.00 – 16.00 Uhr", "9 bis 11".

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::DateParseError;

/// Start used when an event has no time range
pub const DEFAULT_START: (u32, u32) = (10, 0);
/// Duration used when no (usable) end time is given
pub const DEFAULT_DURATION_HOURS: i64 = 2;

const MONTHS: &[(&str, u32)] = &[
    ("januar", 1),
    ("jänner", 1),
    ("jan", 1),
    ("februar", 2),
    ("feb", 2),
    ("märz", 3),
    ("maerz", 3),
    ("marz", 3),
    ("mär", 3),
    ("mrz", 3),
    ("april", 4),
    ("apr", 4),
    ("mai", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("dezember", 12),
    ("dez", 12),
];

fn month_number(token: &str) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    let token = token.to_lowercase();
    MONTHS.iter().find(|(name, _)| *name == token).map(|(_, n)| *n)
}

/// Parse a German display date. The weekday prefix is optional.
pub fn parse_german_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }

    let cleaned = text.replace([',', '.'], " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    // Skip the weekday (or any other leading words) up to the day number
    let start = tokens
        .iter()
        .position(|t| t.parse::<u32>().is_ok())
        .ok_or_else(|| DateParseError::InvalidDate(text.to_string()))?;
    let rest = &tokens[start..];
    if rest.len() < 3 {
        return Err(DateParseError::InvalidDate(text.to_string()));
    }

    let day: u32 = rest[0]
        .parse()
        .map_err(|_| DateParseError::InvalidDate(text.to_string()))?;
    let month = month_number(rest[1]).ok_or_else(|| DateParseError::UnknownMonth(rest[1].to_string()))?;
    let year: i32 = match rest[2].parse::<i32>() {
        Ok(y) if y < 100 => 2000 + y,
        Ok(y) => y,
        Err(_) => return Err(DateParseError::InvalidDate(text.to_string())),
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateParseError::InvalidDate(text.to_string()))
}

fn parse_clock(token: &str) -> Option<NaiveTime> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let (h, m) = match token.split_once([':', '.']) {
        Some((h, m)) => (h.trim().parse::<u32>().ok()?, m.trim().parse::<u32>().ok()?),
        None => (token.parse::<u32>().ok()?, 0),
    };
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Parse "HH:MM-HH:MM" (end optional) into start and end times.
pub fn parse_time_range(text: &str) -> Result<(NaiveTime, Option<NaiveTime>), DateParseError> {
    let normalized = text
        .to_lowercase()
        .replace("uhr", "")
        .replace(" bis ", "-")
        .replace(['–', '—'], "-");

    let mut parts = normalized.splitn(2, '-');
    let start = parts
        .next()
        .and_then(parse_clock)
        .ok_or_else(|| DateParseError::InvalidTime(text.to_string()))?;
    let end = match parts.next() {
        Some(part) => Some(parse_clock(part).ok_or_else(|| DateParseError::InvalidTime(text.to_string()))?),
        None => None,
    };
    Ok((start, end))
}

/// Concrete start and end of an event, in Swiss local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventSchedule {
    /// Combine date and optional time range. Only the date is mandatory;
    /// a missing or unreadable time range falls back to 10:00 for 2 hours.
    pub fn from_texts(date: &str, time: Option<&str>) -> Result<Self, DateParseError> {
        let day = parse_german_date(date)?;
        let default_start = NaiveTime::from_hms_opt(DEFAULT_START.0, DEFAULT_START.1, 0)
            .ok_or_else(|| DateParseError::InvalidTime(format!("{:?}", DEFAULT_START)))?;

        let (start_time, end_time) = match time.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => match parse_time_range(t) {
                Ok(range) => range,
                Err(e) => {
                    log::warn!("[calendar] {}, using default time", e);
                    (default_start, None)
                }
            },
            None => (default_start, None),
        };

        let start = day.and_time(start_time);
        let end = end_time
            .map(|t| day.and_time(t))
            .filter(|end| *end > start)
            .unwrap_or(start + Duration::hours(DEFAULT_DURATION_HOURS));

        Ok(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        d.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_full_german_date() {
        assert_eq!(parse_german_date("Montag, 15. Juli 2025"), Ok(date(2025, 7, 15)));
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(parse_german_date("15. Juli 2025"), Ok(date(2025, 7, 15)));
        assert_eq!(parse_german_date("Mittwoch, 3. März 2027"), Ok(date(2027, 3, 3)));
        assert_eq!(parse_german_date("3. maerz 2027"), Ok(date(2027, 3, 3)));
        assert_eq!(parse_german_date("Fr 1. Dez. 2028"), Ok(date(2028, 12, 1)));
        assert_eq!(parse_german_date("15.07.2025"), Ok(date(2025, 7, 15)));
        assert_eq!(parse_german_date("15.07.25"), Ok(date(2025, 7, 15)));
    }

    #[test]
    fn test_parse_date_errors() {
        assert_eq!(parse_german_date("  "), Err(DateParseError::Empty));
        assert!(matches!(parse_german_date("Montag, 15. Juno 2025"), Err(DateParseError::UnknownMonth(_))));
        assert!(matches!(parse_german_date("bald"), Err(DateParseError::InvalidDate(_))));
        assert!(matches!(parse_german_date("31. Februar 2025"), Err(DateParseError::InvalidDate(_))));
        assert!(matches!(parse_german_date("15. Juli"), Err(DateParseError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_time_range() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(parse_time_range("14:00-16:30"), Ok((t(14, 0), Some(t(16, 30)))));
        assert_eq!(parse_time_range("14.00 – 16.00 Uhr"), Ok((t(14, 0), Some(t(16, 0)))));
        assert_eq!(parse_time_range("9 bis 11"), Ok((t(9, 0), Some(t(11, 0)))));
        assert_eq!(parse_time_range("18:15"), Ok((t(18, 15), None)));
        assert!(parse_time_range("abends").is_err());
        assert!(parse_time_range("25:00-26:00").is_err());
    }

    #[test]
    fn test_schedule_defaults_without_time() {
        let s = EventSchedule::from_texts("Montag, 15. Juli 2025", None).unwrap();
        assert_eq!(s.start, at(date(2025, 7, 15), 10, 0));
        assert_eq!(s.end, at(date(2025, 7, 15), 12, 0));
    }

    #[test]
    fn test_schedule_with_time_range() {
        let s = EventSchedule::from_texts("15. Juli 2025", Some("08:30-11:45")).unwrap();
        assert_eq!(s.start, at(date(2025, 7, 15), 8, 30));
        assert_eq!(s.end, at(date(2025, 7, 15), 11, 45));
    }

    #[test]
    fn test_schedule_end_before_start_uses_default_duration() {
        let s = EventSchedule::from_texts("15. Juli 2025", Some("16:00-15:00")).unwrap();
        assert_eq!(s.end, at(date(2025, 7, 15), 18, 0));
        let s = EventSchedule::from_texts("15. Juli 2025", Some("ganztags")).unwrap();
        assert_eq!(s.start, at(date(2025, 7, 15), 10, 0));
    }

    #[test]
    fn test_schedule_rejects_bad_date() {
        assert!(EventSchedule::from_texts("demnächst", Some("10:00-12:00")).is_err());
    }
}
