//! Event List Component
//!
//! Loading indicator, empty state and the list of event cards.

use leptos::prelude::*;
use web_sys::ScrollLogicalPosition;

use crate::components::EventCard;
use crate::context::use_app_context;
use crate::dom;
use crate::store::{self, use_app_store};

/// Delay before scrolling to the form, letting it render first
const SCROLL_DELAY_MS: u32 = 100;
/// Delay before focusing the name input, after the smooth scroll
const FOCUS_DELAY_MS: u32 = 400;

#[component]
pub fn EventList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let select = Callback::new(move |event_id: String| {
        if !store::store_select_event(&store, &event_id) {
            return;
        }
        let name = store::selected_event(&store).map(|e| e.name).unwrap_or_default();
        log::info!("[LIST] Selected event {}", event_id);
        dom::after(SCROLL_DELAY_MS, move || {
            dom::scroll_into_view_by_id("registration-section", ScrollLogicalPosition::Start);
            dom::after(FOCUS_DELAY_MS, move || {
                dom::focus_by_id("name");
                ctx.announce(format!("Anmeldung für {} geöffnet", name));
            });
        });
    });

    view! {
        <section
            id="events-section"
            class="events-section"
            aria-labelledby="events-title"
            aria-busy=move || store::is_loading(&store).to_string()
        >
            <h2 id="events-title">"Verfügbare Anlässe"</h2>

            <Show when=move || store::is_loading(&store)>
                <div id="loading" class="loading" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    <span>"Anlässe werden geladen..."</span>
                </div>
            </Show>

            <Show when=move || !store::is_loading(&store) && store::events(&store).is_empty() && ctx.error.get().is_none()>
                <p id="no-events" class="no-events">"Zurzeit sind keine Anlässe verfügbar."</p>
            </Show>

            <div id="events-list" class="events-list" role="list">
                {move || {
                    let events = store::events(&store);
                    let total = events.len();
                    events
                        .into_iter()
                        .enumerate()
                        .map(|(index, event)| view! {
                            <EventCard event=event index=index total=total on_select=select />
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
