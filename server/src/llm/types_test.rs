use super::*;

// =============================================================================
// ContentBlock serialization — must match the Anthropic wire shape
// =============================================================================

#[test]
fn text_block_serializes_tagged() {
    let block = ContentBlock::Text { text: "hi".into() };
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "text", "text": "hi" }));
}

#[test]
fn image_block_serializes_nested_source() {
    let block = ContentBlock::image_base64("image/png", "QUJD");
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "image",
            "source": { "type": "base64", "media_type": "image/png", "data": "QUJD" }
        })
    );
}

#[test]
fn unrecognized_block_deserializes_to_unknown() {
    let block: ContentBlock =
        serde_json::from_str(r#"{"type":"server_tool_use","id":"x"}"#).unwrap();
    assert!(matches!(block, ContentBlock::Unknown));
}

// =============================================================================
// Message helpers
// =============================================================================

#[test]
fn user_text_builds_single_text_block() {
    let message = Message::user_text("hello");
    assert_eq!(message.role, "user");
    assert_eq!(message.content.len(), 1);
    assert!(matches!(&message.content[0], ContentBlock::Text { text } if text == "hello"));
}

// =============================================================================
// LlmError display — surfaced verbatim in route error bodies
// =============================================================================

#[test]
fn api_response_display_includes_status() {
    let err = LlmError::ApiResponse { status: 429, body: "slow down".into() };
    assert_eq!(err.to_string(), "API response error: status 429");
}

#[test]
fn missing_api_key_display_names_var() {
    let err = LlmError::MissingApiKey { var: "ANTHROPIC_API_KEY".into() };
    assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
}
