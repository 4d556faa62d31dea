//! Schulhelfer App
//!
//! Event list on top, registration form below once an event is selected.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use schulhelfer_core::api::{is_configured_url, FetchGeneration};
use schulhelfer_core::ApiError;

use crate::commands;
use crate::components::{EventList, LiveRegion, MessageBanner, RegistrationForm};
use crate::config;
use crate::context::{AppContext, FormState};
use crate::store::{self, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(FetchGeneration::default());
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));

    // Restore the draft before anything writes it back
    let draft = commands::load_draft();
    let form = FormState::new(draft.as_ref());
    let pending_event = StoredValue::new(draft.as_ref().and_then(|d| d.event_id.clone()));
    let stored_draft = StoredValue::new(draft);

    provide_context(store);
    provide_context(ctx);
    provide_context(form);

    let configured = is_configured_url(&config::load().api_url);
    if !configured {
        log::error!("[APP] API_URL not configured");
        ctx.show_error(ApiError::NotConfigured.events_message());
    }

    // Load events on mount and whenever a reload is requested
    Effect::new(move |_| {
        let generation = reload_trigger.get();
        if !configured {
            return;
        }
        log::info!("[APP] Loading events, generation={}", generation);
        spawn_local(async move {
            store::store_set_loading(&store, true);
            ctx.hide_error();
            let result = commands::fetch_events().await;
            // A newer reload owns the list and the loading flag now
            if !generation.is_current(reload_trigger.get_untracked()) {
                log::debug!("[APP] Dropping stale event list, generation={}", generation);
                return;
            }
            match result {
                Ok(events) => {
                    log::info!("[APP] Loaded {} events", events.len());
                    let count = events.len();
                    store::store_replace_events(&store, events);
                    ctx.announce(format!("{} {} verfügbar", count, if count == 1 { "Anlass" } else { "Anlässe" }));

                    // Reopen the form for a restored draft, once
                    if let Some(id) = pending_event.get_value() {
                        pending_event.set_value(None);
                        if store::store_select_event(&store, &id) {
                            log::info!("[APP] Restored draft for event {}", id);
                        }
                    }
                }
                Err(e) => {
                    log::error!("[APP] Loading events failed: {}", e);
                    ctx.show_error(e.events_message());
                }
            }
            store::store_set_loading(&store, false);
        });
    });

    // Persist the draft on every edit or selection change; the restored
    // draft keeps its timestamp until the visitor changes something
    Effect::new(move |_| {
        let event_id = store.selected_event_id().get().or_else(|| pending_event.get_value());
        let draft = form.draft(event_id, js_sys::Date::now() as i64);
        if !stored_draft.with_value(|stored| draft.changed_since(stored.as_ref())) {
            return;
        }
        if draft.is_empty() {
            commands::clear_draft();
            stored_draft.set_value(None);
        } else {
            commands::save_draft(&draft);
            stored_draft.set_value(Some(draft));
        }
    });

    view! {
        <div class="schulhelfer">
            <LiveRegion />
            <MessageBanner />
            <EventList />
            <RegistrationForm />
        </div>
    }
}
