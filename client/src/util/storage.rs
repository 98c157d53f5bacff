//! Chat history persistence in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole history lives as one JSON array under a single key, written
//! back in full after every change. A corrupt value is dropped (with a
//! console warning) instead of surfaced: losing history is recoverable,
//! wedging the page on load is not.

use crate::state::conversation::ChatMessage;

/// The one storage key chat history lives under.
pub const STORAGE_KEY: &str = "sage.chat.history";

/// Decode a stored history value. `None` means the value is corrupt and
/// should be discarded.
#[must_use]
pub fn parse_stored_history(raw: &str) -> Option<Vec<ChatMessage>> {
    serde_json::from_str(raw).ok()
}

/// Load history from `localStorage`.
///
/// Absent and corrupt values both yield an empty list; a corrupt value is
/// removed so it cannot fail again on the next load.
#[must_use]
pub fn load_history() -> Vec<ChatMessage> {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return Vec::new();
        };
        let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) else {
            return Vec::new();
        };
        match parse_stored_history(&raw) {
            Some(messages) => messages,
            None => {
                log::warn!("dropping corrupt chat history");
                let _ = storage.remove_item(STORAGE_KEY);
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Overwrite the stored history with the full message list.
pub fn save_history(messages: &[ChatMessage]) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(messages) else {
            return;
        };
        if storage.set_item(STORAGE_KEY, &raw).is_err() {
            log::warn!("failed to persist chat history");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = messages;
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
