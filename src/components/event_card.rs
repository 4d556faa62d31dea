//! Event Card Component
//!
//! One selectable event with availability badge and countdown.
//! Cards form a roving-focus group: arrows move, Enter/Space select.

use leptos::prelude::*;

use schulhelfer_core::calendar::countdown_label;
use schulhelfer_core::navigation::{is_activation_key, next_focus_index};
use schulhelfer_core::Event;

use crate::dom;
use crate::store::{self, use_app_store};

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn EventCard(
    event: Event,
    index: usize,
    total: usize,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();

    let badge = event.badge();
    let countdown = countdown_label(&event.date, today());
    let helpers = event.helpers_label();
    let time = event.time_text().map(str::to_string);
    let description = event.description_text().map(str::to_string);

    let id_for_selected = event.id.clone();
    let is_selected = Memo::new(move |_| store::is_selected(&store, &id_for_selected));

    let id_for_click = event.id.clone();
    let id_for_key = event.id.clone();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if is_activation_key(&key) {
            ev.prevent_default();
            on_select.run(id_for_key.clone());
        } else if let Some(next) = next_focus_index(&key, index, total) {
            ev.prevent_default();
            dom::focus_by_id(&dom::card_id(next));
        }
    };

    view! {
        <article
            id=dom::card_id(index)
            class=move || if is_selected.get() { "event-card event-card--selected" } else { "event-card" }
            role="listitem"
            tabindex="0"
            data-id=event.id.clone()
            aria-selected=move || is_selected.get().to_string()
            on:click=move |_| on_select.run(id_for_click.clone())
            on:keydown=on_keydown
        >
            <div class="event-header">
                <h3 class="event-name">{event.name.clone()}</h3>
                <span class=badge.css_class()>{badge.label()}</span>
            </div>
            <div class="event-meta">
                <span class="event-meta-item event-meta-item--date">{event.date.clone()}</span>
                {time.map(|t| view! { <span class="event-meta-item event-meta-item--time">{t}</span> })}
                <span class="event-meta-item event-meta-item--helpers">{helpers}</span>
                {countdown.map(|c| view! { <span class="event-countdown">{c}</span> })}
            </div>
            {description.map(|d| view! { <p class="event-description">{d}</p> })}
            <div class="event-cta" aria-hidden="true">
                <span>"Jetzt anmelden"</span>
            </div>
        </article>
    }
}
