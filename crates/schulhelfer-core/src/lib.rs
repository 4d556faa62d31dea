//! Schulhelfer Core
//!
//! Platform-independent logic for the helper registration widget:
//! - domain: events, drafts, identifiers and their error types
//! - validation: registration form field rules
//! - navigation: roving keyboard focus across the event list
//! - calendar: German date parsing, countdowns and `.ics` export
//! - api: wire format, retry policy and the backend client

pub mod api;
pub mod calendar;
pub mod domain;
pub mod navigation;
pub mod validation;

pub use api::{ApiClient, ApiConfig, HttpResponse, HttpTransport, RetryPolicy, Timer};
pub use domain::{
    ApiError, AvailabilityBadge, ClientIdentifier, DateParseError, Event, FormDraft, StorageError,
    ValidationError,
};
