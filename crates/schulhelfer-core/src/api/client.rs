//! API Client
//!
//! Event fetching and registration submission against the backend script.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::retry::{with_retry, RetryPolicy};
use super::wire::{parse_events, parse_registration, RegistrationRequest};
use super::{HttpTransport, Timer};
use crate::domain::{ApiError, ClientIdentifier, Event};

/// Value shipped in the page template before the school fills in its URL
pub const PLACEHOLDER_URL: &str = "IHRE_GOOGLE_APPS_SCRIPT_URL_HIER";

pub fn is_configured_url(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url != PLACEHOLDER_URL && (url.starts_with("https://") || url.starts_with("http://"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub api_url: String,
    pub fetch_timeout_ms: u32,
    pub submit_timeout_ms: u32,
    pub fetch_retry: RetryPolicy,
    pub submit_retry: RetryPolicy,
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            fetch_timeout_ms: 10_000,
            submit_timeout_ms: 15_000,
            fetch_retry: RetryPolicy::for_events(1_000),
            submit_retry: RetryPolicy::for_registration(1_000, 3_000),
        }
    }
}

pub struct ApiClient<H, T> {
    config: ApiConfig,
    pub(super) transport: H,
    pub(super) timer: T,
    identifier: ClientIdentifier,
}

impl<H: HttpTransport, T: Timer> ApiClient<H, T> {
    pub fn new(config: ApiConfig, transport: H, timer: T, identifier: ClientIdentifier) -> Result<Self, ApiError> {
        if !is_configured_url(&config.api_url) {
            return Err(ApiError::NotConfigured);
        }
        Ok(Self {
            config,
            transport,
            timer,
            identifier,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn identifier(&self) -> &ClientIdentifier {
        &self.identifier
    }

    /// `{API_URL}?action=getEvents&identifier=...&_=timestamp`
    pub fn events_url(&self, now_ms: i64) -> String {
        let base = self.config.api_url.trim();
        let sep = if base.contains('?') { '&' } else { '?' };
        format!(
            "{}{}action=getEvents&identifier={}&_={}",
            base,
            sep,
            utf8_percent_encode(self.identifier.as_str(), NON_ALPHANUMERIC),
            now_ms
        )
    }

    /// Load the current event list, retrying network failures.
    pub async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        let timeout = self.config.fetch_timeout_ms;
        with_retry(&self.config.fetch_retry, &self.timer, "events", |attempt| async move {
            let url = self.events_url(self.timer.now_ms());
            log::debug!("[events] GET attempt {}", attempt);
            let response = self.transport.get(&url, timeout).await?;
            parse_events(&response)
        })
        .await
    }

    /// Post a registration; `Ok` carries the server's confirmation text.
    pub async fn submit_registration(&self, request: &RegistrationRequest) -> Result<String, ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let url = self.config.api_url.trim();
        let timeout = self.config.submit_timeout_ms;
        let body = body.as_str();
        with_retry(&self.config.submit_retry, &self.timer, "registration", |attempt| async move {
            log::debug!("[registration] POST attempt {}", attempt);
            let response = self.transport.post_json(url, body, timeout).await?;
            parse_registration(&response)
        })
        .await
    }
}
