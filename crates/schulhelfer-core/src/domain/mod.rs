//! Domain Layer
//!
//! Entities exchanged with the backend or persisted in the browser,
//! plus the error types shared by every layer above.

mod draft;
mod error;
mod event;
mod identifier;

pub use draft::{FormDraft, DRAFT_TTL_MS};
pub use error::{ApiError, DateParseError, StorageError, ValidationError};
pub use event::{AvailabilityBadge, Event};
pub use identifier::ClientIdentifier;
