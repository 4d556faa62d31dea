//! Event Entity
//!
//! A school-helper activity ("Anlass") as delivered by the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Event data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub name: String,
    /// Display date, e.g. "Montag, 15. Juli 2025"
    #[serde(rename = "datum", default, deserialize_with = "text_or_null")]
    pub date: String,
    /// Optional time range, e.g. "14:00-16:00"
    #[serde(rename = "zeit", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "freiePlaetze", default, deserialize_with = "lenient_count")]
    pub free_slots: u32,
    #[serde(rename = "aktuelleHelfer", default, deserialize_with = "lenient_count")]
    pub current_helpers: u32,
    #[serde(rename = "maxHelfer", default, deserialize_with = "lenient_count")]
    pub max_helpers: u32,
    #[serde(rename = "beschreibung", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// Time range text, if present and non-blank
    pub fn time_text(&self) -> Option<&str> {
        self.time.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    pub fn badge(&self) -> AvailabilityBadge {
        AvailabilityBadge::for_free_slots(self.free_slots)
    }

    pub fn helpers_label(&self) -> String {
        format!("{}/{} Helfer", self.current_helpers, self.max_helpers)
    }
}

/// Backend ids arrive as strings or numbers depending on the sheet cell
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
        Raw::Float(f) => f.to_string(),
    })
}

/// Empty sheet cells arrive as `null`
fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Slot counts come from hand-edited sheet cells: numbers, numeric text,
/// negatives on overbooked rows, or nothing. Anything unreadable counts as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let n = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) => f.trunc() as i64,
        Some(Raw::Text(s)) => s.trim().parse::<f64>().map(|f| f.trunc() as i64).unwrap_or(0),
        Some(Raw::Other(_)) | None => 0,
    };
    Ok(n.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Availability badge shown on each event card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityBadge {
    Last,
    Limited(u32),
    Available(u32),
}

impl AvailabilityBadge {
    pub fn for_free_slots(free: u32) -> Self {
        match free {
            0..=1 => AvailabilityBadge::Last,
            2..=3 => AvailabilityBadge::Limited(free),
            _ => AvailabilityBadge::Available(free),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AvailabilityBadge::Last => "event-badge event-badge--last",
            AvailabilityBadge::Limited(_) => "event-badge event-badge--limited",
            AvailabilityBadge::Available(_) => "event-badge event-badge--available",
        }
    }

    pub fn label(&self) -> String {
        match self {
            AvailabilityBadge::Last => "Letzter Platz!".to_string(),
            AvailabilityBadge::Limited(n) => format!("Nur {} Plätze", n),
            AvailabilityBadge::Available(n) => format!("{} Plätze frei", n),
        }
    }
}
