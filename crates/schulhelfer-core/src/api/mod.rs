//! Backend API
//!
//! The client is generic over how requests are sent and how time passes,
//! so the browser build and the native tests share the same retry logic.

mod client;
mod generation;
mod retry;
mod wire;


use async_trait::async_trait;

use crate::domain::ApiError;

pub use client::{is_configured_url, ApiClient, ApiConfig, PLACEHOLDER_URL};
pub use generation::FetchGeneration;
pub use retry::{with_retry, RetryPolicy};
pub use wire::{parse_events, parse_registration, EventsResponse, RegistrationRequest, RegistrationResponse};

/// Raw HTTP answer; status interpretation is left to the client
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests. Implementations map transport failures to
/// `ApiError::Network` and aborted requests to `ApiError::Timeout`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str, timeout_ms: u32) -> Result<HttpResponse, ApiError>;

    async fn post_json(&self, url: &str, body: &str, timeout_ms: u32) -> Result<HttpResponse, ApiError>;
}

/// Clock and delay source
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);

    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;
}
