//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use schulhelfer_core::Event;

/// Event list and selection with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Events from the most recent successful fetch
    pub events: Vec<Event>,
    /// Id of the event the visitor is registering for
    pub selected_event_id: Option<String>,
    /// A fetch is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the event list wholesale; any selection is dropped
pub fn store_replace_events(store: &AppStore, events: Vec<Event>) {
    store.selected_event_id().set(None);
    store.events().set(events);
}

/// Select an event by id; returns false when the id is unknown
pub fn store_select_event(store: &AppStore, event_id: &str) -> bool {
    let known = store.events().with_untracked(|events| events.iter().any(|e| e.id == event_id));
    if known {
        store.selected_event_id().set(Some(event_id.to_string()));
    }
    known
}

pub fn store_clear_selection(store: &AppStore) {
    store.selected_event_id().set(None);
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    store.loading().set(loading);
}

/// Currently selected event (tracked)
pub fn selected_event(store: &AppStore) -> Option<Event> {
    let id = store.selected_event_id().get()?;
    store.events().with(|events| events.iter().find(|e| e.id == id).cloned())
}

pub fn is_selected(store: &AppStore, event_id: &str) -> bool {
    store.selected_event_id().with(|id| id.as_deref() == Some(event_id))
}

pub fn events(store: &AppStore) -> Vec<Event> {
    store.events().get()
}

pub fn is_loading(store: &AppStore) -> bool {
    store.loading().get()
}
