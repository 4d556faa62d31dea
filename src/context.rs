//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;
use web_sys::ScrollLogicalPosition;

use schulhelfer_core::api::FetchGeneration;
use schulhelfer_core::{Event, FormDraft, ValidationError};

use crate::dom;

/// How long a screen-reader announcement stays in the live region
const ANNOUNCE_CLEAR_MS: u32 = 1_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch events - read
    pub reload_trigger: ReadSignal<FetchGeneration>,
    /// Trigger to refetch events - write
    set_reload_trigger: WriteSignal<FetchGeneration>,
    /// Error banner text
    pub error: RwSignal<Option<String>>,
    /// Success banner text
    pub success: RwSignal<Option<String>>,
    /// Polite live-region text
    pub status: RwSignal<String>,
    /// Event of the last successful registration (calendar export after reset)
    pub last_registered: RwSignal<Option<Event>>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<FetchGeneration>, WriteSignal<FetchGeneration>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            status: RwSignal::new(String::new()),
            last_registered: RwSignal::new(None),
        }
    }

    /// Trigger a refetch of events
    pub fn reload(&self) {
        self.set_reload_trigger.update(|g| *g = g.next());
    }

    pub fn show_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
        dom::after(50, || dom::scroll_into_view_by_id("error-message", ScrollLogicalPosition::Center));
    }

    pub fn hide_error(&self) {
        self.error.set(None);
    }

    pub fn show_success(&self, msg: impl Into<String>) {
        self.success.set(Some(msg.into()));
        dom::after(50, || dom::scroll_into_view_by_id("success-message", ScrollLogicalPosition::Center));
    }

    pub fn hide_success(&self) {
        self.success.set(None);
        self.last_registered.set(None);
    }

    /// Announce to screen readers; cleared again after one second
    pub fn announce(&self, msg: impl Into<String>) {
        let msg = msg.into();
        log::debug!("[A11Y] {}", msg);
        self.status.set(msg);
        let status = self.status;
        dom::after(ANNOUNCE_CLEAR_MS, move || status.set(String::new()));
    }
}

/// Registration form fields and their inline errors
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub name_error: RwSignal<Option<ValidationError>>,
    pub email_error: RwSignal<Option<ValidationError>>,
    /// A submission is in flight; the submit button is disabled
    pub submitting: RwSignal<bool>,
}

impl FormState {
    /// Fresh state, pre-filled from a restored draft
    pub fn new(draft: Option<&FormDraft>) -> Self {
        let draft = draft.cloned().unwrap_or_default();
        Self {
            name: RwSignal::new(draft.name),
            email: RwSignal::new(draft.email),
            phone: RwSignal::new(draft.phone),
            name_error: RwSignal::new(None),
            email_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.name_error.set(None);
        self.email_error.set(None);
    }

    /// Snapshot for local storage (tracked, so effects re-run on edits)
    pub fn draft(&self, event_id: Option<String>, now_ms: i64) -> FormDraft {
        FormDraft::new(&self.name.get(), &self.email.get(), &self.phone.get(), event_id, now_ms)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_form_state() -> FormState {
    expect_context::<FormState>()
}
