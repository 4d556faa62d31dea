//! Message Banner Component
//!
//! Error and success messages above the event list. After a successful
//! registration the success banner also offers the calendar export.

use leptos::prelude::*;

use crate::components::CalendarButton;
use crate::context::use_app_context;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_app_context();
    let registered = Signal::derive(move || ctx.last_registered.get());

    view! {
        <Show when=move || ctx.error.get().is_some()>
            <div id="error-message" class="message message--error" role="alert">
                <p id="error-text">{move || ctx.error.get().unwrap_or_default()}</p>
                <button
                    type="button"
                    class="message-close"
                    aria-label="Fehlermeldung schliessen"
                    on:click=move |_| ctx.hide_error()
                >
                    "×"
                </button>
            </div>
        </Show>
        <Show when=move || ctx.success.get().is_some()>
            <div id="success-message" class="message message--success" role="status">
                <p id="success-text">{move || ctx.success.get().unwrap_or_default()}</p>
                <Show when=move || registered.get().is_some()>
                    <CalendarButton event=registered />
                </Show>
                <button
                    type="button"
                    class="message-close"
                    aria-label="Meldung schliessen"
                    on:click=move |_| ctx.hide_success()
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
