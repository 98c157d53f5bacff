use super::*;
use crate::llm::types::LlmError;
use crate::state::test_helpers::MockLlm;

#[tokio::test]
async fn returns_summary() {
    let llm = MockLlm::replying("The article argues for smaller functions.");
    let summary = summarize_article(&llm, "Long article body...").await.unwrap();
    assert_eq!(summary, "The article argues for smaller functions.");
}

#[tokio::test]
async fn rejects_blank_article() {
    let llm = MockLlm::new(vec![Err(LlmError::ApiRequest("must not be reached".into()))]);
    let err = summarize_article(&llm, "\n\t ").await.unwrap_err();
    assert!(matches!(err, FlowError::EmptyInput("article")));
}

#[tokio::test]
async fn propagates_provider_error() {
    let llm = MockLlm::new(vec![Err(LlmError::ApiResponse { status: 503, body: "overloaded".into() })]);
    let err = summarize_article(&llm, "some text").await.unwrap_err();
    assert!(matches!(err, FlowError::Llm(_)));
}
