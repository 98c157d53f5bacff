use super::*;

fn state_with(messages: Vec<ChatMessage>, loading: bool) -> ConversationState {
    ConversationState { messages, loading }
}

#[test]
fn plan_rejects_blank_input() {
    let state = ConversationState::default();

    assert_eq!(plan_submission(&state, "   \n  ", 1_000), SubmitPlan::Rejected);
    assert_eq!(plan_submission(&state, "", 1_000), SubmitPlan::Rejected);
}

#[test]
fn plan_rejects_while_request_in_flight() {
    let state = state_with(Vec::new(), true);

    assert_eq!(plan_submission(&state, "hello", 1_000), SubmitPlan::Rejected);
}

#[test]
fn plan_trims_user_content() {
    let state = ConversationState::default();

    let SubmitPlan::Remote { user, query } = plan_submission(&state, "  what is rust?  ", 42) else {
        panic!("expected a remote plan");
    };
    assert_eq!(user.content, "what is rust?");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.id, "42");
    assert_eq!(query, "what is rust?");
}

#[test]
fn plan_serves_fixture_for_markdown_trigger() {
    let state = ConversationState::default();

    let SubmitPlan::Fixture { user, reply } =
        plan_submission(&state, "Give me a MARKDOWN TEST please", 500)
    else {
        panic!("expected the fixture plan");
    };
    assert_eq!(user.id, "500");
    assert_eq!(reply.id, "501");
    assert_eq!(reply.role, Role::Assistant);
    assert!(reply.content.contains("**Bolded Text**"));
    assert!(reply.content.contains("1. First item"));
    assert!(reply.content.contains("```javascript"));
    assert!(reply.content.contains("[link to Google](https://www.google.com)"));
}

#[test]
fn plan_fixture_trigger_must_match_inside_input() {
    let state = ConversationState::default();

    let plain = plan_submission(&state, "markdown", 10);
    assert!(matches!(plain, SubmitPlan::Remote { .. }));
}

#[test]
fn settle_ok_becomes_assistant_message() {
    let reply = settle_submission(Ok("Here you go.".to_owned()), 900);

    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.id, "900");
    assert_eq!(reply.content, "Here you go.");
}

#[test]
fn settle_error_becomes_apology_with_description() {
    let failure = ApiFailure::Upstream {
        status: 429,
        message: Some("rate limited".to_owned()),
    };

    let reply = settle_submission(Err(failure), 900);

    assert_eq!(reply.role, Role::Assistant);
    assert!(reply.content.starts_with("Sorry, I encountered an error:"));
    assert!(reply.content.contains("rate limited"));
    assert!(reply.content.contains("429"));
}

#[test]
fn failed_remote_cycle_leaves_one_reply_and_clears_loading() {
    let mut state = ConversationState::default();

    let SubmitPlan::Remote { user, query } = plan_submission(&state, "hello", 100) else {
        panic!("expected a remote plan");
    };
    state.messages.push(user);
    state.loading = true;
    assert_eq!(query, "hello");

    let reply = settle_submission(
        Err(ApiFailure::Upstream {
            status: 429,
            message: Some("rate limited".to_owned()),
        }),
        200,
    );
    state.messages.push(reply);
    state.loading = false;

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert!(state.messages[1].content.contains("rate limited"));
    assert!(state.messages[0].id < state.messages[1].id);
    assert!(!state.loading);
}

#[test]
fn clear_reports_already_empty() {
    let mut state = ConversationState::default();

    assert_eq!(clear_messages(&mut state), ClearOutcome::AlreadyEmpty);
}

#[test]
fn clear_empties_a_populated_conversation() {
    let mut state = state_with(
        vec![
            ChatMessage::new(1, Role::User, "hi"),
            ChatMessage::new(2, Role::Assistant, "hello"),
        ],
        false,
    );

    assert_eq!(clear_messages(&mut state), ClearOutcome::Cleared);
    assert!(state.messages.is_empty());
}

#[test]
fn role_serializes_lowercase() {
    let message = ChatMessage::new(7, Role::User, "hi");

    let value = serde_json::to_value(&message).unwrap();

    assert_eq!(
        value,
        serde_json::json!({ "id": "7", "role": "user", "content": "hi" })
    );
}
