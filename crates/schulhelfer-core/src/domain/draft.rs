//! Form Draft
//!
//! Registration form contents kept in local storage between page loads.

use serde::{Deserialize, Serialize};

use super::StorageError;

/// Drafts older than one hour are discarded
pub const DRAFT_TTL_MS: i64 = 60 * 60 * 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub event_id: Option<String>,
    /// Save time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl FormDraft {
    pub fn new(name: &str, email: &str, phone: &str, event_id: Option<String>, now_ms: i64) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            event_id,
            timestamp: now_ms,
        }
    }

    /// Nothing worth restoring
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.phone.trim().is_empty()
            && self.event_id.is_none()
    }

    /// Whether this snapshot is a real edit compared to what is stored.
    /// Saving only on edits keeps `timestamp` at the last edit, so a draft
    /// restored on page load still expires one hour after it was typed.
    pub fn changed_since(&self, stored: Option<&FormDraft>) -> bool {
        match stored {
            Some(prev) => {
                self.name != prev.name
                    || self.email != prev.email
                    || self.phone != prev.phone
                    || self.event_id != prev.event_id
            }
            None => !self.is_empty(),
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp >= DRAFT_TTL_MS
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|e| StorageError::Write(e.to_string()))
    }

    /// Decode a stored draft, dropping it when it has expired.
    pub fn restore(json: &str, now_ms: i64) -> Result<Option<Self>, StorageError> {
        let draft: FormDraft =
            serde_json::from_str(json).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        if draft.is_expired(now_ms) {
            log::debug!("[draft] discarding draft saved at {}", draft.timestamp);
            return Ok(None);
        }
        Ok(Some(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_752_566_400_000;

    fn sample() -> FormDraft {
        FormDraft::new("Anna Muster", "anna@example.ch", "", Some("12".into()), T)
    }

    #[test]
    fn test_restore_before_expiry() {
        let json = sample().to_json().unwrap();
        let restored = FormDraft::restore(&json, T + DRAFT_TTL_MS - 1).unwrap();
        assert_eq!(restored, Some(sample()));
    }

    #[test]
    fn test_discard_after_expiry() {
        let json = sample().to_json().unwrap();
        assert_eq!(FormDraft::restore(&json, T + DRAFT_TTL_MS + 1).unwrap(), None);
    }

    #[test]
    fn test_wire_field_names() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"eventId\":\"12\""));
        assert!(json.contains(&format!("\"timestamp\":{}", T)));
    }

    #[test]
    fn test_corrupt_draft() {
        assert!(matches!(
            FormDraft::restore("{not json", T),
            Err(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn test_unchanged_restore_keeps_timestamp() {
        let stored = FormDraft::restore(&sample().to_json().unwrap(), T + 59 * 60 * 1000)
            .unwrap()
            .unwrap();
        let snapshot = FormDraft::new("Anna Muster", "anna@example.ch", "", Some("12".into()), T + 59 * 60 * 1000);
        assert!(!snapshot.changed_since(Some(&stored)));
        assert_eq!(stored.timestamp, T);
        assert!(stored.is_expired(T + DRAFT_TTL_MS));
    }

    #[test]
    fn test_changed_since() {
        let stored = sample();
        let edited = FormDraft::new("Anna Muster", "anna@example.ch", "061 000 00 00", Some("12".into()), T + 1);
        assert!(edited.changed_since(Some(&stored)));

        let reselected = FormDraft::new("Anna Muster", "anna@example.ch", "", None, T + 1);
        assert!(reselected.changed_since(Some(&stored)));

        assert!(!FormDraft::new("", "", "", None, T).changed_since(None));
        assert!(sample().changed_since(None));
    }

    #[test]
    fn test_is_empty() {
        assert!(FormDraft::new(" ", "", "", None, T).is_empty());
        assert!(!FormDraft::new("", "", "", Some("1".into()), T).is_empty());
    }
}
