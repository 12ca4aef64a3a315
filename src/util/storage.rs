//! Browser localStorage helpers for unsaved post drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize browser-only read/write behavior so the post form
//! can keep a draft across reloads without repeating web-sys glue. Native
//! builds no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::PostDraft;

const DRAFT_KEY_PREFIX: &str = "quill_draft";

/// Storage key for the draft of a new post (`None`) or an edit of `post_id`.
pub fn draft_key(post_id: Option<&str>) -> String {
    match post_id {
        Some(id) => format!("{DRAFT_KEY_PREFIX}:{id}"),
        None => format!("{DRAFT_KEY_PREFIX}:new"),
    }
}

/// Whether `draft` carries edits relative to `baseline` (the saved post, or
/// an empty draft for a new post). Surrounding whitespace does not count.
pub fn draft_has_edits(draft: &PostDraft, baseline: &PostDraft) -> bool {
    draft.title.trim() != baseline.title.trim() || draft.body.trim() != baseline.body.trim()
}

/// Keep the stored draft for `key` in step with the form: saved while it has
/// edits, removed once it matches `baseline` again.
pub fn sync_draft(key: &str, draft: &PostDraft, baseline: &PostDraft) {
    if draft_has_edits(draft, baseline) {
        save_json(key, draft);
    } else {
        remove(key);
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
