//! Registration Form Component
//!
//! Name, email and optional phone for the selected event. Fields validate
//! on blur, errors clear on input, and submit is blocked until both pass.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::ScrollLogicalPosition;

use schulhelfer_core::validation::{validate_email, validate_name, Field, FormErrors};

use crate::commands;
use crate::components::CalendarButton;
use crate::config;
use crate::context::{use_app_context, use_form_state};
use crate::dom;
use crate::store::{self, use_app_store};

fn field_id(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
    }
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let form = use_form_state();

    let selected = Signal::derive(move || store::selected_event(&store));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.submitting.get_untracked() {
            return;
        }
        ctx.hide_error();
        ctx.hide_success();

        let name = form.name.get_untracked();
        let email = form.email.get_untracked();
        let phone = form.phone.get_untracked();

        let errors = FormErrors::check(&name, &email);
        form.name_error.set(errors.name);
        form.email_error.set(errors.email);
        if let Some(field) = errors.first_invalid() {
            dom::focus_by_id(field_id(field));
            ctx.announce("Bitte korrigieren Sie die markierten Felder.");
            return;
        }

        let Some(event) = selected.get_untracked() else {
            return;
        };

        form.submitting.set(true);
        spawn_local(async move {
            log::info!("[FORM] Submitting registration for event {}", event.id);
            match commands::submit_registration(&event.id, &name, &email, &phone).await {
                Ok(message) => {
                    ctx.show_success(message);
                    ctx.last_registered.set(Some(event));
                    commands::clear_draft();
                    form.reset();
                    store::store_clear_selection(&store);
                    ctx.announce("Anmeldung erfolgreich!");
                    dom::after(config::load().refresh_delay_ms, move || ctx.reload());
                }
                Err(e) => {
                    log::error!("[FORM] Registration failed: {}", e);
                    let message = e.registration_message();
                    ctx.show_error(message.clone());
                    ctx.announce(format!("Fehler: {}", message));
                }
            }
            form.submitting.set(false);
        });
    };

    let on_cancel = move |_| {
        form.reset();
        store::store_clear_selection(&store);
        ctx.announce("Anmeldung abgebrochen");
        dom::scroll_into_view_by_id("events-section", ScrollLogicalPosition::Start);
        dom::after(400, || dom::focus_by_id(&dom::card_id(0)));
    };

    view! {
        <Show when=move || selected.get().is_some()>
            <section id="registration-section" class="registration-section" aria-labelledby="registration-title">
                <h2 id="registration-title">
                    "Anmeldung für "
                    <span id="selected-event-name">{move || selected.get().map(|e| e.name).unwrap_or_default()}</span>
                </h2>
                <p class="selected-event-date">
                    {move || selected.get().map(|e| match e.time_text() {
                        Some(t) => format!("{}, {}", e.date, t),
                        None => e.date.clone(),
                    })}
                </p>

                <form id="registration-form" class="registration-form" novalidate=true on:submit=on_submit>
                    <div class="form-field">
                        <label for="name">"Name " <span aria-hidden="true">"*"</span></label>
                        <input
                            id="name"
                            type="text"
                            autocomplete="name"
                            required=true
                            aria-required="true"
                            aria-describedby="name-error"
                            aria-invalid=move || form.name_error.get().map(|_| "true")
                            prop:value=move || form.name.get()
                            on:input=move |ev| {
                                form.name.set(event_target_value(&ev));
                                form.name_error.set(None);
                            }
                            on:blur=move |_| form.name_error.set(validate_name(&form.name.get_untracked()).err())
                        />
                        <Show when=move || form.name_error.get().is_some()>
                            <p id="name-error" class="field-error" role="alert">
                                {move || form.name_error.get().map(|e| e.to_string())}
                            </p>
                        </Show>
                    </div>

                    <div class="form-field">
                        <label for="email">"E-Mail " <span aria-hidden="true">"*"</span></label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            required=true
                            aria-required="true"
                            aria-describedby="email-error"
                            aria-invalid=move || form.email_error.get().map(|_| "true")
                            prop:value=move || form.email.get()
                            on:input=move |ev| {
                                form.email.set(event_target_value(&ev));
                                form.email_error.set(None);
                            }
                            on:blur=move |_| form.email_error.set(validate_email(&form.email.get_untracked()).err())
                        />
                        <Show when=move || form.email_error.get().is_some()>
                            <p id="email-error" class="field-error" role="alert">
                                {move || form.email_error.get().map(|e| e.to_string())}
                            </p>
                        </Show>
                    </div>

                    <div class="form-field">
                        <label for="phone">"Telefon (optional)"</label>
                        <input
                            id="phone"
                            type="tel"
                            autocomplete="tel"
                            prop:value=move || form.phone.get()
                            on:input=move |ev| form.phone.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-actions">
                        <button
                            type="submit"
                            id="submit-btn"
                            class="btn btn-primary"
                            disabled=move || form.submitting.get()
                            aria-busy=move || form.submitting.get().to_string()
                        >
                            {move || if form.submitting.get() { "Wird gesendet..." } else { "Verbindlich anmelden" }}
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=on_cancel>
                            "Abbrechen"
                        </button>
                        <CalendarButton event=selected />
                    </div>
                </form>
            </section>
        </Show>
    }
}
