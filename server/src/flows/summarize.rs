//! Summarization flow — condense pasted article text.

use tracing::info;

use super::{FlowError, MAX_COMPLETION_TOKENS};
use crate::llm::LlmChat;
use crate::llm::types::Message;

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Summarize the given article text.
///
/// # Errors
///
/// Returns a [`FlowError`] if the article is blank, the provider call
/// fails, or the model answers with no text.
pub async fn summarize_article(llm: &dyn LlmChat, article: &str) -> Result<String, FlowError> {
    let article = article.trim();
    if article.is_empty() {
        return Err(FlowError::EmptyInput("article"));
    }

    let prompt = format!("Summarize the following article in a concise paragraph.\n\n{article}");
    let messages = [Message::user_text(prompt)];
    let completion = llm.complete(MAX_COMPLETION_TOKENS, SYSTEM_PROMPT, &messages).await?;
    info!(
        article_chars = article.len(),
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "article summarized"
    );

    let text = completion.text.trim();
    if text.is_empty() {
        return Err(FlowError::EmptyCompletion);
    }
    Ok(text.to_string())
}

#[cfg(test)]
#[path = "summarize_test.rs"]
mod tests;
