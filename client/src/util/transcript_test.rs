use super::*;

#[test]
fn transcript_layout_is_exact() {
    let messages = vec![
        ChatMessage::new(43_500_000, Role::User, "Hello"),
        ChatMessage::new(43_560_000, Role::Assistant, "Hi! How can I help?"),
    ];

    let transcript = build_transcript(&messages, "1/1/2026, 10:00:00 AM");

    assert_eq!(
        transcript,
        "Sage Chat History - 1/1/2026, 10:00:00 AM\n\n\
         [12:05] User:\nHello\n\n\
         [12:06] Sage:\nHi! How can I help?\n\n"
    );
}

#[test]
fn empty_conversation_is_header_only() {
    let transcript = build_transcript(&[], "now");

    assert_eq!(transcript, "Sage Chat History - now\n\n");
}

#[test]
fn multiline_content_is_kept_verbatim() {
    let messages = vec![ChatMessage::new(43_500_000, Role::Assistant, "line one\nline two")];

    let transcript = build_transcript(&messages, "now");

    assert!(transcript.contains("[12:05] Sage:\nline one\nline two\n\n"));
}

#[test]
fn export_of_empty_conversation_is_a_no_op() {
    assert_eq!(plan_export(&[], "now"), ExportPlan::Empty);
}

#[test]
fn export_of_populated_conversation_builds_the_transcript() {
    let messages = vec![ChatMessage::new(43_500_000, Role::User, "Hello")];

    let ExportPlan::Download { text } = plan_export(&messages, "now") else {
        panic!("expected a download plan");
    };
    assert!(text.starts_with("Sage Chat History - now\n\n"));
    assert!(text.contains("[12:05] User:\nHello\n\n"));
}

#[test]
fn download_name_is_stable() {
    assert_eq!(TRANSCRIPT_FILE_NAME, "sage-chat-history.txt");
}
