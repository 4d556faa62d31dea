//! Client Identifier
//!
//! Opaque per-browser token the backend uses for rate limiting.

use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentifier(String);

impl ClientIdentifier {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Reuse a stored value; blank or oversized values are rejected.
    pub fn from_stored(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.len() > 128 {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// Stored identifier if valid, otherwise a fresh one (flagged `true`)
    pub fn load_or_generate(stored: Option<&str>) -> (Self, bool) {
        match stored.and_then(Self::from_stored) {
            Some(id) => (id, false),
            None => (Self::generate(), true),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
