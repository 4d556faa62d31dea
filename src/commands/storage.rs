//! Local Storage
//!
//! Two slots: the client identifier and the registration form draft.
//! Storage failures (private mode, quota) are logged and otherwise ignored.

use std::cell::OnceCell;

use web_sys::Storage;

use schulhelfer_core::{ClientIdentifier, FormDraft, StorageError};

use super::js_error;

const IDENTIFIER_KEY: &str = "schulhelfer_identifier";
const DRAFT_KEY: &str = "schulhelfer_form_draft";

thread_local! {
    static IDENTIFIER: OnceCell<ClientIdentifier> = const { OnceCell::new() };
}

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn read(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Corrupt(js_error(&e)))
}

fn write(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| StorageError::Write(js_error(&e)))
}

fn remove(key: &str) -> Result<(), StorageError> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| StorageError::Write(js_error(&e)))
}

/// Identifier for this browser, created on first use
pub fn client_identifier() -> ClientIdentifier {
    IDENTIFIER.with(|cell| {
        cell.get_or_init(|| {
            let stored = read(IDENTIFIER_KEY).unwrap_or_else(|e| {
                log::warn!("[STORAGE] {}", e);
                None
            });
            let (id, fresh) = ClientIdentifier::load_or_generate(stored.as_deref());
            if fresh {
                log::info!("[STORAGE] new client identifier");
                if let Err(e) = write(IDENTIFIER_KEY, id.as_str()) {
                    log::warn!("[STORAGE] {}", e);
                }
            }
            id
        })
        .clone()
    })
}

pub fn save_draft(draft: &FormDraft) {
    let result = draft.to_json().and_then(|json| write(DRAFT_KEY, &json));
    if let Err(e) = result {
        log::warn!("[STORAGE] draft not saved: {}", e);
    }
}

/// Stored draft if present and younger than one hour; stale or corrupt
/// drafts are removed.
pub fn load_draft() -> Option<FormDraft> {
    let json = match read(DRAFT_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("[STORAGE] {}", e);
            return None;
        }
    };

    match FormDraft::restore(&json, js_sys::Date::now() as i64) {
        Ok(Some(draft)) => Some(draft),
        Ok(None) => {
            clear_draft();
            None
        }
        Err(e) => {
            log::warn!("[STORAGE] {}", e);
            clear_draft();
            None
        }
    }
}

pub fn clear_draft() {
    if let Err(e) = remove(DRAFT_KEY) {
        log::warn!("[STORAGE] {}", e);
    }
}
