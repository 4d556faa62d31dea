//! DOM Helpers
//!
//! Focus and scroll by element id, optionally after a delay.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn focus_by_id(id: &str) {
    if let Some(el) = element_by_id(id) {
        let _ = el.focus();
    }
}

pub fn scroll_into_view_by_id(id: &str, block: ScrollLogicalPosition) {
    if let Some(el) = element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(block);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Run `f` after `ms` milliseconds (fire and forget)
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// DOM id of the event card at `index`
pub fn card_id(index: usize) -> String {
    format!("event-card-{}", index)
}
