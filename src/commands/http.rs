//! Fetch Transport
//!
//! `window.fetch` with an `AbortController` timeout.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, RequestMode, Response};

use schulhelfer_core::api::{HttpResponse, HttpTransport};
use schulhelfer_core::ApiError;

use super::js_error;

pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn get(&self, url: &str, timeout_ms: u32) -> Result<HttpResponse, ApiError> {
        send("GET", url, None, timeout_ms).await
    }

    async fn post_json(&self, url: &str, body: &str, timeout_ms: u32) -> Result<HttpResponse, ApiError> {
        send("POST", url, Some(body), timeout_ms).await
    }
}

fn network(value: JsValue) -> ApiError {
    ApiError::Network(js_error(&value))
}

async fn send(method: &str, url: &str, body: Option<&str>, timeout_ms: u32) -> Result<HttpResponse, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let controller = AbortController::new().map_err(network)?;

    let headers = Headers::new().map_err(network)?;
    headers.set("Accept", "application/json").map_err(network)?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    init.set_signal(Some(&controller.signal()));
    if let Some(body) = body {
        headers.set("Content-Type", "application/json").map_err(network)?;
        init.set_body(&JsValue::from_str(body));
    }
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;

    // Dropping the guard at the end of this function cancels the timer
    let timed_out = Rc::new(Cell::new(false));
    let _guard = {
        let timed_out = timed_out.clone();
        let controller = controller.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let fail = |value: JsValue| {
        if timed_out.get() {
            ApiError::Timeout(timeout_ms)
        } else {
            network(value)
        }
    };

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(&fail)?
        .dyn_into()
        .map_err(&fail)?;
    let status = response.status();

    let text = JsFuture::from(response.text().map_err(&fail)?).await.map_err(&fail)?;
    Ok(HttpResponse::new(status, text.as_string().unwrap_or_default()))
}
