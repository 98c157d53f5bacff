//! Plain-text transcript export.

use crate::state::conversation::{ChatMessage, Role};
use crate::util::clock::format_hhmm;

/// File name offered for the transcript download.
pub const TRANSCRIPT_FILE_NAME: &str = "sage-chat-history.txt";

/// What an export request should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportPlan {
    /// Nothing to export.
    Empty,
    /// Offer `text` as a download named [`TRANSCRIPT_FILE_NAME`].
    Download { text: String },
}

/// Decide what exporting the conversation should do. Empty conversations
/// produce no file.
#[must_use]
pub fn plan_export(messages: &[ChatMessage], generated_at: &str) -> ExportPlan {
    if messages.is_empty() {
        return ExportPlan::Empty;
    }
    ExportPlan::Download {
        text: build_transcript(messages, generated_at),
    }
}

/// Render the conversation as a plain-text transcript: a header line with
/// the generation time, then one block per message.
#[must_use]
pub fn build_transcript(messages: &[ChatMessage], generated_at: &str) -> String {
    let mut out = format!("Sage Chat History - {generated_at}\n\n");
    for message in messages {
        let sender = match message.role {
            Role::User => "User",
            Role::Assistant => "Sage",
        };
        let time = format_hhmm(&message.id);
        out.push_str(&format!("[{time}] {sender}:\n{}\n\n", message.content));
    }
    out
}

/// Offer `text` to the user as a downloadable file.
///
/// Goes through a temporary object URL on an off-screen anchor; the URL
/// is revoked as soon as the click has been dispatched.
pub fn download_text_file(filename: &str, text: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            log::warn!("transcript blob creation failed");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                if let Some(body) = document.body() {
                    let _ = body.append_child(&anchor);
                    anchor.click();
                    let _ = body.remove_child(&anchor);
                }
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, text);
    }
}

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;
