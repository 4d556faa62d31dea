//! UI Components
//!
//! Reusable Leptos components.

mod calendar_button;
mod event_card;
mod event_list;
mod live_region;
mod message_banner;
mod registration_form;

pub use calendar_button::CalendarButton;
pub use event_card::EventCard;
pub use event_list::EventList;
pub use live_region::LiveRegion;
pub use message_banner::MessageBanner;
pub use registration_form::RegistrationForm;
