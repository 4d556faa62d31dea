//! Live Region
//!
//! Visually hidden status line for screen-reader announcements.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LiveRegion() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="status-message" class="visually-hidden" role="status" aria-live="polite" aria-atomic="true">
            {move || ctx.status.get()}
        </div>
    }
}
