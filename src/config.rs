//! Page Configuration
//!
//! Read from `window.CONFIG`, which the hosting page defines:
//!
//! ```html
//! <script>window.CONFIG = { API_URL: "https://script.google.com/macros/s/.../exec" };</script>
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

use schulhelfer_core::api::{ApiConfig, RetryPolicy};
use schulhelfer_core::calendar::DEFAULT_LOCATION;

/// Build-time fallback when the page defines no `CONFIG`
const FALLBACK_API_URL: Option<&str> = option_env!("SCHULHELFER_API_URL");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(rename = "API_URL", default)]
    pub api_url: String,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_ms: u32,
    #[serde(default = "default_submit_timeout")]
    pub submit_timeout_ms: u32,
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u32,
    #[serde(default = "default_rate_limit_delay")]
    pub rate_limit_delay_ms: u32,
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u32,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_fetch_timeout() -> u32 {
    10_000
}

fn default_submit_timeout() -> u32 {
    15_000
}

fn default_retry_delay() -> u32 {
    1_000
}

fn default_rate_limit_delay() -> u32 {
    3_000
}

fn default_refresh_delay() -> u32 {
    2_500
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl PageConfig {
    pub fn with_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            fetch_timeout_ms: default_fetch_timeout(),
            submit_timeout_ms: default_submit_timeout(),
            retry_delay_ms: default_retry_delay(),
            rate_limit_delay_ms: default_rate_limit_delay(),
            refresh_delay_ms: default_refresh_delay(),
            location: default_location(),
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            api_url: self.api_url.clone(),
            fetch_timeout_ms: self.fetch_timeout_ms,
            submit_timeout_ms: self.submit_timeout_ms,
            fetch_retry: RetryPolicy::for_events(self.retry_delay_ms),
            submit_retry: RetryPolicy::for_registration(self.retry_delay_ms, self.rate_limit_delay_ms),
        }
    }
}

fn from_js(value: JsValue) -> Result<PageConfig, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Invalid CONFIG: {}", e))
}

/// Current page configuration. A missing or malformed `CONFIG` yields an
/// empty URL, which the API client reports as "not configured".
pub fn load() -> PageConfig {
    let page_value = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("CONFIG")).ok())
        .filter(|v| !v.is_undefined() && !v.is_null());

    match page_value {
        Some(value) => from_js(value).unwrap_or_else(|e| {
            log::error!("[CONFIG] {}", e);
            PageConfig::with_url("")
        }),
        None => {
            log::warn!("[CONFIG] window.CONFIG missing, using build-time fallback");
            PageConfig::with_url(FALLBACK_API_URL.unwrap_or(""))
        }
    }
}
