use super::*;

// =============================================================================
// parse_response
// =============================================================================

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": "Hello there" }, "finish_reason": "stop" }
        ],
        "usage": { "prompt_tokens": 12, "completion_tokens": 34 }
    })
    .to_string();
    let completion = parse_response(&json).unwrap();
    assert_eq!(completion.text, "Hello there");
    assert_eq!(completion.input_tokens, 12);
    assert_eq!(completion.output_tokens, 34);
}

#[test]
fn parse_missing_choices_is_error() {
    let json = serde_json::json!({ "usage": {} }).to_string();
    let err = parse_response(&json).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_null_content_yields_empty_text() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    let completion = parse_response(&json).unwrap();
    assert!(completion.text.is_empty());
}

#[test]
fn parse_missing_usage_defaults_to_zero() {
    let json = serde_json::json!({
        "choices": [{ "message": { "content": "ok" } }]
    })
    .to_string();
    let completion = parse_response(&json).unwrap();
    assert_eq!(completion.input_tokens, 0);
    assert_eq!(completion.output_tokens, 0);
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_response("nope").unwrap_err(), LlmError::ApiParse(_)));
}

// =============================================================================
// build_messages
// =============================================================================

#[test]
fn build_prepends_system_message() {
    let msgs = build_messages("be brief", &[Message::user_text("hi")]);
    let json = serde_json::to_value(&msgs).unwrap();
    assert_eq!(json[0]["role"], "system");
    assert_eq!(json[0]["content"], "be brief");
    assert_eq!(json[1]["role"], "user");
    assert_eq!(json[1]["content"], "hi");
}

#[test]
fn build_skips_blank_system() {
    let msgs = build_messages("  ", &[Message::user_text("hi")]);
    assert_eq!(msgs.len(), 1);
}

#[test]
fn build_image_message_uses_data_url_parts() {
    let messages = [Message {
        role: "user".into(),
        content: vec![
            ContentBlock::image_base64("image/png", "QUJD"),
            ContentBlock::Text { text: "Describe this image.".into() },
        ],
    }];
    let msgs = build_messages("", &messages);
    let json = serde_json::to_value(&msgs).unwrap();
    assert_eq!(json[0]["content"][0]["type"], "image_url");
    assert_eq!(json[0]["content"][0]["image_url"]["url"], "data:image/png;base64,QUJD");
    assert_eq!(json[0]["content"][1]["type"], "text");
    assert_eq!(json[0]["content"][1]["text"], "Describe this image.");
}

#[test]
fn build_multi_text_blocks_join_into_string_content() {
    let messages = [Message {
        role: "user".into(),
        content: vec![
            ContentBlock::Text { text: "a".into() },
            ContentBlock::Text { text: "b".into() },
        ],
    }];
    let msgs = build_messages("", &messages);
    let json = serde_json::to_value(&msgs).unwrap();
    assert_eq!(json[0]["content"], "a\nb");
}
