//! Browser Timer

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use schulhelfer_core::api::Timer;

pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
