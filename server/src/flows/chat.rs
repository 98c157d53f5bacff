//! Chat flow — one user question, one assistant answer.

use tracing::info;

use super::{FlowError, MAX_COMPLETION_TOKENS};
use crate::llm::LlmChat;
use crate::llm::types::Message;

const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Answer the following question to the best of your ability.";

/// Forward a single chat turn to the model and return its answer.
///
/// # Errors
///
/// Returns a [`FlowError`] if the query is blank, the provider call fails,
/// or the model answers with no text.
pub async fn start_conversation(llm: &dyn LlmChat, query: &str) -> Result<String, FlowError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(FlowError::EmptyInput("query"));
    }

    let messages = [Message::user_text(query)];
    let completion = llm.complete(MAX_COMPLETION_TOKENS, SYSTEM_PROMPT, &messages).await?;
    info!(
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "chat turn completed"
    );

    let text = completion.text.trim();
    if text.is_empty() {
        return Err(FlowError::EmptyCompletion);
    }
    Ok(text.to_string())
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
