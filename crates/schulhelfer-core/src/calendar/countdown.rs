//! Countdown Labels
//!
//! "Heute", "Morgen", "In N Tagen" for upcoming events.

use chrono::NaiveDate;

use super::parse::parse_german_date;

/// Whole days from `today` to the event date (negative if past)
pub fn days_until(date_text: &str, today: NaiveDate) -> Option<i64> {
    let date = parse_german_date(date_text).ok()?;
    Some((date - today).num_days())
}

/// Label for an event card; `None` for past or unreadable dates
pub fn countdown_label(date_text: &str, today: NaiveDate) -> Option<String> {
    match days_until(date_text, today)? {
        d if d < 0 => None,
        0 => Some("Heute".to_string()),
        1 => Some("Morgen".to_string()),
        d => Some(format!("In {} Tagen", d)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
    }

    #[test]
    fn test_countdown_labels() {
        assert_eq!(countdown_label("Donnerstag, 10. Juli 2025", today()).as_deref(), Some("Heute"));
        assert_eq!(countdown_label("Freitag, 11. Juli 2025", today()).as_deref(), Some("Morgen"));
        assert_eq!(countdown_label("Montag, 15. Juli 2025", today()).as_deref(), Some("In 5 Tagen"));
    }

    #[test]
    fn test_no_countdown_for_past_or_unparseable() {
        assert_eq!(countdown_label("1. Juli 2025", today()), None);
        assert_eq!(countdown_label("nach den Ferien", today()), None);
        assert_eq!(days_until("nach den Ferien", today()), None);
    }
}
