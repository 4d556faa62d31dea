//! Browser Bindings
//!
//! Frontend wrappers around the backend script and browser APIs,
//! organized by concern.

mod download;
mod http;
mod storage;
mod timer;

use wasm_bindgen::JsValue;

use schulhelfer_core::api::{ApiClient, RegistrationRequest};
use schulhelfer_core::{ApiError, Event};

use crate::config;

pub use download::download_text_file;
pub use http::FetchTransport;
pub use storage::{clear_draft, client_identifier, load_draft, save_draft};
pub use timer::BrowserTimer;

type BrowserClient = ApiClient<FetchTransport, BrowserTimer>;

fn client() -> Result<BrowserClient, ApiError> {
    let cfg = config::load();
    ApiClient::new(cfg.api_config(), FetchTransport, BrowserTimer, client_identifier())
}

/// Best-effort text of a thrown JS value
pub(crate) fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown JS error".to_string())
}

// ========================
// Backend Commands
// ========================

pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
    client()?.fetch_events().await
}

pub async fn submit_registration(event_id: &str, name: &str, email: &str, phone: &str) -> Result<String, ApiError> {
    let client = client()?;
    let request = RegistrationRequest::new(event_id, name, email, phone, client.identifier());
    client.submit_registration(&request).await
}
