//! Error Types
//!
//! Every failure a visitor can run into, each with its German user message.

use std::fmt;

/// Failures talking to the registration backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No usable API URL configured on the page
    NotConfigured,
    /// The request never produced a response (offline, DNS, CORS, ...)
    Network(String),
    /// The request was aborted after the configured timeout
    Timeout(u32),
    /// Non-success HTTP status
    Status(u16),
    /// Backend refused the request because of too many attempts
    RateLimited(Option<String>),
    /// Backend answered but reported an error
    Server(String),
    /// Response body was not the expected JSON
    Decode(String),
}

impl ApiError {
    /// Transient failures are worth another attempt
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout(_))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited(_))
    }

    /// Message shown when loading the event list failed
    pub fn events_message(&self) -> String {
        match self {
            ApiError::NotConfigured => NOT_CONFIGURED.to_string(),
            ApiError::Network(_) | ApiError::Timeout(_) => {
                "Verbindung zum Server fehlgeschlagen. Bitte prüfen Sie Ihre Internetverbindung und versuchen Sie es später erneut.".to_string()
            }
            ApiError::RateLimited(msg) => msg.clone().unwrap_or_else(|| RATE_LIMITED.to_string()),
            ApiError::Server(msg) => format!("Die Anlässe konnten nicht geladen werden: {}", msg),
            ApiError::Status(_) | ApiError::Decode(_) => {
                "Die Anlässe konnten nicht geladen werden. Bitte später erneut versuchen.".to_string()
            }
        }
    }

    /// Message shown when a registration could not be submitted
    pub fn registration_message(&self) -> String {
        match self {
            ApiError::NotConfigured => NOT_CONFIGURED.to_string(),
            ApiError::Network(_) | ApiError::Timeout(_) => {
                "Die Anmeldung konnte nicht gesendet werden. Bitte prüfen Sie Ihre Internetverbindung.".to_string()
            }
            ApiError::RateLimited(msg) => msg.clone().unwrap_or_else(|| RATE_LIMITED.to_string()),
            ApiError::Server(msg) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Server(_) | ApiError::Status(_) | ApiError::Decode(_) => {
                "Ein Fehler ist aufgetreten.".to_string()
            }
        }
    }
}

const NOT_CONFIGURED: &str =
    "Das Tool ist noch nicht konfiguriert. Bitte setzen Sie die API_URL in der index.html.";
const RATE_LIMITED: &str =
    "Zu viele Anfragen. Bitte warten Sie einen Moment und versuchen Sie es erneut.";

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotConfigured => write!(f, "API URL not configured"),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout(ms) => write!(f, "Request timed out after {} ms", ms),
            ApiError::Status(code) => write!(f, "HTTP error: {}", code),
            ApiError::RateLimited(msg) => write!(f, "Rate limited: {}", msg.as_deref().unwrap_or("-")),
            ApiError::Server(msg) => write!(f, "Server error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Registration form field errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameMissing,
    NameTooShort,
    EmailMissing,
    EmailInvalid,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationError::NameMissing => "Bitte geben Sie Ihren Namen ein.",
            ValidationError::NameTooShort => "Der Name muss mindestens 2 Zeichen haben.",
            ValidationError::EmailMissing => "Bitte geben Sie Ihre E-Mail-Adresse ein.",
            ValidationError::EmailInvalid => "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
        })
    }
}

impl std::error::Error for ValidationError {}

/// Displayed date text could not be turned into a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    Empty,
    UnknownMonth(String),
    InvalidDate(String),
    InvalidTime(String),
}

impl DateParseError {
    pub fn user_message(&self) -> String {
        "Das Datum dieses Anlasses konnte nicht gelesen werden. Der Kalendereintrag kann nicht erstellt werden.".to_string()
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Empty => write!(f, "Empty date text"),
            DateParseError::UnknownMonth(m) => write!(f, "Unknown month: {}", m),
            DateParseError::InvalidDate(s) => write!(f, "Invalid date: {}", s),
            DateParseError::InvalidTime(s) => write!(f, "Invalid time range: {}", s),
        }
    }
}

impl std::error::Error for DateParseError {}

/// Browser key-value storage failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    Write(String),
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Local storage unavailable"),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Stored value corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Network("offline".into()).is_transient());
        assert!(ApiError::Timeout(10_000).is_transient());
        assert!(!ApiError::Status(500).is_transient());
        assert!(!ApiError::RateLimited(None).is_transient());
    }

    #[test]
    fn test_registration_message_prefers_server_text() {
        let err = ApiError::Server("Dieser Anlass ist bereits voll.".into());
        assert_eq!(err.registration_message(), "Dieser Anlass ist bereits voll.");
        assert_eq!(ApiError::Server("  ".into()).registration_message(), "Ein Fehler ist aufgetreten.");
    }

    #[test]
    fn test_connection_message() {
        let msg = ApiError::Timeout(10_000).events_message();
        assert!(msg.starts_with("Verbindung zum Server fehlgeschlagen"));
    }
}
