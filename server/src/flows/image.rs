//! Image flow — describe one uploaded image.
//!
//! The client sends the image as a base64 data URI
//! (`data:image/png;base64,...`); the payload is split here and forwarded
//! as an image content block.

use tracing::info;

use super::{FlowError, MAX_COMPLETION_TOKENS};
use crate::llm::LlmChat;
use crate::llm::types::{ContentBlock, Message};

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";
const INSTRUCTION: &str = "Analyze this image and provide a detailed description of its contents.";

/// Describe the image carried by a base64 data URI.
///
/// # Errors
///
/// Returns a [`FlowError`] if the data URI is malformed, the provider call
/// fails, or the model answers with no text.
pub async fn describe_image(llm: &dyn LlmChat, photo_data_uri: &str) -> Result<String, FlowError> {
    let (media_type, payload) = parse_data_uri(photo_data_uri)
        .ok_or_else(|| FlowError::InvalidImageData("expected a base64 data URI".to_string()))?;

    let messages = [Message {
        role: "user".to_string(),
        content: vec![
            ContentBlock::image_base64(media_type, payload),
            ContentBlock::Text { text: INSTRUCTION.to_string() },
        ],
    }];
    let completion = llm.complete(MAX_COMPLETION_TOKENS, SYSTEM_PROMPT, &messages).await?;
    info!(
        media_type,
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "image described"
    );

    let text = completion.text.trim();
    if text.is_empty() {
        return Err(FlowError::EmptyCompletion);
    }
    Ok(text.to_string())
}

/// Split `data:<media type>;base64,<payload>` into its two halves.
/// Returns `None` for anything else, including empty halves.
fn parse_data_uri(uri: &str) -> Option<(&str, &str)> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let media_type = header.strip_suffix(";base64")?;
    if media_type.is_empty() || payload.is_empty() {
        return None;
    }
    Some((media_type, payload))
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
