//! Calendar Button Component
//!
//! Downloads an `.ics` file for an event. An unreadable date shows an
//! error instead of downloading.

use leptos::prelude::*;

use schulhelfer_core::calendar::{calendar_file, MIME_TYPE};
use schulhelfer_core::Event;

use crate::commands;
use crate::config;
use crate::context::use_app_context;

#[component]
pub fn CalendarButton(#[prop(into)] event: Signal<Option<Event>>) -> impl IntoView {
    let ctx = use_app_context();

    let export = move |_| {
        let Some(event) = event.get_untracked() else {
            return;
        };
        let location = config::load().location;
        match calendar_file(&event, &location) {
            Ok(file) => {
                if let Err(e) = commands::download_text_file(&file.file_name, MIME_TYPE, &file.content) {
                    log::error!("[CALENDAR] download failed: {}", e);
                    ctx.show_error("Der Kalendereintrag konnte nicht heruntergeladen werden.");
                } else {
                    ctx.announce("Kalendereintrag heruntergeladen");
                }
            }
            Err(e) => {
                log::warn!("[CALENDAR] {} for event {}", e, event.id);
                ctx.show_error(e.user_message());
            }
        }
    };

    view! {
        <button type="button" class="btn btn-secondary btn-calendar" on:click=export>
            "In Kalender eintragen (.ics)"
        </button>
    }
}
