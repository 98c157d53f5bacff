//! Conversation state and the submission state machine.
//!
//! DESIGN
//! ======
//! Submitting input is a three-way decision: reject it, answer it locally
//! from the markdown fixture, or send it to the server. `plan_submission`
//! makes that decision as a pure function over the current state, and
//! `settle_submission` folds the server's outcome back into a message, so
//! the chat panel only has to append what it is handed and run the one
//! network call a `Remote` plan asks for.

use serde::{Deserialize, Serialize};

use crate::net::api::ApiFailure;

/// Which side of the conversation a message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Messages are append-only; nothing edits one
/// after it lands in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Creation time in epoch milliseconds, as a decimal string. Doubles
    /// as the message identity and the source of its time label.
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(id_ms: i64, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id_ms.to_string(),
            role,
            content: content.into(),
        }
    }
}

/// State behind the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    /// Single-slot admission gate: `true` while a reply is pending, and
    /// no new submission is accepted until it clears.
    pub loading: bool,
}

/// What a submission attempt should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// Nothing to do: blank input, or a request already in flight.
    Rejected,
    /// Answer locally with the canned markdown walkthrough.
    Fixture { user: ChatMessage, reply: ChatMessage },
    /// Append `user`, then send `query` to the server.
    Remote { user: ChatMessage, query: String },
}

/// Case-insensitive trigger for the local markdown walkthrough.
pub const MARKDOWN_FIXTURE_TRIGGER: &str = "markdown test";

const MARKDOWN_FIXTURE_REPLY: &str = r#"Okay, here's a Markdown test:

**Bolded Text**

*Italicized Text*

A list:
- Item 1
- Item 2
  - Sub-item 2.1

A numbered list:
1. First item
2. Second item

`inline code`

```javascript
function greet(name) {
  console.log(`Hello, ${name}!`);
}
```

> A blockquote example.

A horizontal rule:

---

And a [link to Google](https://www.google.com)!"#;

/// Decide what submitting `raw_input` should do.
///
/// Pure: the caller appends the returned messages and performs whatever
/// I/O the plan names. The fixture reply takes `now_ms + 1` so ids stay
/// strictly ordered within the pair.
#[must_use]
pub fn plan_submission(state: &ConversationState, raw_input: &str, now_ms: i64) -> SubmitPlan {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() || state.loading {
        return SubmitPlan::Rejected;
    }

    let user = ChatMessage::new(now_ms, Role::User, trimmed);
    if trimmed.to_lowercase().contains(MARKDOWN_FIXTURE_TRIGGER) {
        let reply = ChatMessage::new(now_ms + 1, Role::Assistant, MARKDOWN_FIXTURE_REPLY);
        return SubmitPlan::Fixture { user, reply };
    }

    SubmitPlan::Remote {
        query: trimmed.to_owned(),
        user,
    }
}

/// Fold a remote outcome into the assistant's next message.
///
/// Failures become an in-conversation apology carrying the failure
/// description; the thread never ends on a missing reply.
#[must_use]
pub fn settle_submission(outcome: Result<String, ApiFailure>, now_ms: i64) -> ChatMessage {
    match outcome {
        Ok(text) => ChatMessage::new(now_ms, Role::Assistant, text),
        Err(failure) => ChatMessage::new(
            now_ms,
            Role::Assistant,
            format!("Sorry, I encountered an error: {failure}"),
        ),
    }
}

/// Outcome of a clear request, for the caller's feedback toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    Cleared,
}

/// Empty the conversation unless it already is.
pub fn clear_messages(state: &mut ConversationState) -> ClearOutcome {
    if state.messages.is_empty() {
        return ClearOutcome::AlreadyEmpty;
    }
    state.messages.clear();
    ClearOutcome::Cleared
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
