//! Wire Format
//!
//! JSON shapes of the backend script and how answers map to errors.

use serde::{Deserialize, Serialize};

use super::HttpResponse;
use crate::domain::{ApiError, ClientIdentifier, Event};

const DEFAULT_SUCCESS: &str = "Vielen Dank für Ihre Anmeldung!";

/// Rows stay raw JSON so one unreadable row does not sink the list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// POST body of a registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationRequest {
    #[serde(rename = "anlassId")]
    pub event_id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "telefon")]
    pub phone: String,
    pub identifier: String,
}

impl RegistrationRequest {
    pub fn new(event_id: &str, name: &str, email: &str, phone: &str, identifier: &ClientIdentifier) -> Self {
        Self {
            event_id: event_id.to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            identifier: identifier.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "rateLimited", default)]
    pub rate_limited: bool,
}

fn looks_rate_limited(message: &str) -> bool {
    message.to_lowercase().contains("zu viele")
}

/// Interpret the answer to `action=getEvents`
pub fn parse_events(response: &HttpResponse) -> Result<Vec<Event>, ApiError> {
    if response.status == 429 {
        return Err(ApiError::RateLimited(None));
    }
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    let data: EventsResponse =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(error) = data.error.filter(|e| !e.trim().is_empty()) {
        if looks_rate_limited(&error) {
            return Err(ApiError::RateLimited(Some(error)));
        }
        return Err(ApiError::Server(error));
    }
    Ok(decode_rows(data.events.unwrap_or_default()))
}

fn decode_rows(rows: Vec<serde_json::Value>) -> Vec<Event> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Event>(row) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("[api] skipping event row {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Interpret the answer to a registration POST; `Ok` carries the success message
pub fn parse_registration(response: &HttpResponse) -> Result<String, ApiError> {
    let parsed = serde_json::from_str::<RegistrationResponse>(&response.body);

    let data = match parsed {
        Ok(data) => data,
        Err(_) if response.status == 429 => return Err(ApiError::RateLimited(None)),
        Err(_) if !response.is_success() => return Err(ApiError::Status(response.status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    let message = data.message.filter(|m| !m.trim().is_empty());

    if data.success && response.is_success() {
        return Ok(message.unwrap_or_else(|| DEFAULT_SUCCESS.to_string()));
    }
    if response.status == 429 || data.rate_limited || message.as_deref().is_some_and(looks_rate_limited) {
        return Err(ApiError::RateLimited(message));
    }
    match message {
        Some(m) => Err(ApiError::Server(m)),
        None if !response.is_success() => Err(ApiError::Status(response.status)),
        None => Err(ApiError::Server(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let id = ClientIdentifier::from_stored("client-1").unwrap();
        let req = RegistrationRequest::new("5", " Anna ", "anna@example.ch ", "", &id);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["anlassId"], "5");
        assert_eq!(json["name"], "Anna");
        assert_eq!(json["email"], "anna@example.ch");
        assert_eq!(json["telefon"], "");
        assert_eq!(json["identifier"], "client-1");
    }

    #[test]
    fn test_parse_events() {
        let ok = HttpResponse::new(200, r#"{"events":[{"id":1,"name":"A","datum":"1. Mai 2025"}]}"#);
        assert_eq!(parse_events(&ok).unwrap().len(), 1);

        let empty = HttpResponse::new(200, r#"{}"#);
        assert!(parse_events(&empty).unwrap().is_empty());

        let server = HttpResponse::new(200, r#"{"error":"Tabelle nicht gefunden"}"#);
        assert_eq!(parse_events(&server), Err(ApiError::Server("Tabelle nicht gefunden".into())));

        assert_eq!(parse_events(&HttpResponse::new(503, "")), Err(ApiError::Status(503)));
        assert!(matches!(parse_events(&HttpResponse::new(200, "<html>")), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_parse_events_keeps_untidy_rows() {
        let body = r#"{"events":[
            {"id":1,"name":"Sporttag","datum":"15. Juli 2025","freiePlaetze":4},
            {"id":2,"name":"Znüni","datum":"16. Juli 2025","freiePlaetze":-1},
            {"id":3,"name":"Putztag","datum":"17. Juli 2025","freiePlaetze":"3"},
            {"id":4,"name":"Ausflug","datum":null,"freiePlaetze":2}
        ]}"#;
        let events = parse_events(&HttpResponse::new(200, body)).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[1].free_slots, 0);
        assert_eq!(events[2].free_slots, 3);
        assert_eq!(events[3].date, "");
    }

    #[test]
    fn test_parse_events_skips_unreadable_row() {
        let body = r#"{"events":[{"id":1,"name":"A","datum":"1. Mai 2025"},{"name":"ohne id"},"kaputt"]}"#;
        let events = parse_events(&HttpResponse::new(200, body)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");
    }

    #[test]
    fn test_parse_registration() {
        let ok = HttpResponse::new(200, r#"{"success":true,"message":"Danke!"}"#);
        assert_eq!(parse_registration(&ok), Ok("Danke!".into()));

        let ok_silent = HttpResponse::new(200, r#"{"success":true}"#);
        assert_eq!(parse_registration(&ok_silent), Ok(DEFAULT_SUCCESS.into()));

        let full = HttpResponse::new(200, r#"{"success":false,"message":"Anlass ist voll."}"#);
        assert_eq!(parse_registration(&full), Err(ApiError::Server("Anlass ist voll.".into())));
    }

    #[test]
    fn test_parse_registration_rate_limit() {
        let by_message = HttpResponse::new(200, r#"{"success":false,"message":"Zu viele Anfragen."}"#);
        assert_eq!(
            parse_registration(&by_message),
            Err(ApiError::RateLimited(Some("Zu viele Anfragen.".into())))
        );

        let by_flag = HttpResponse::new(200, r#"{"success":false,"rateLimited":true}"#);
        assert_eq!(parse_registration(&by_flag), Err(ApiError::RateLimited(None)));

        let by_status = HttpResponse::new(429, "");
        assert_eq!(parse_registration(&by_status), Err(ApiError::RateLimited(None)));
    }
}
