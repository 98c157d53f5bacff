//! Flow route handlers — JSON in, JSON out.
//!
//! Error bodies always carry a human-readable `message`; the client
//! surfaces it verbatim. Status mapping: bad input 400, LLM not
//! configured 503, provider trouble 502.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use wire::{
    AnalyzeImageReply, AnalyzeImageRequest, ChatReply, ChatRequest, ErrorBody,
    SummarizeArticleReply, SummarizeArticleRequest,
};

use crate::flows::{self, FlowError};
use crate::state::AppState;

type ErrorReply = (StatusCode, Json<ErrorBody>);

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ErrorReply> {
    let llm = require_llm(&state)?;
    match flows::chat::start_conversation(llm, &req.query).await {
        Ok(response) => Ok(Json(ChatReply { response })),
        Err(e) => {
            warn!(error = %e, "chat flow failed");
            Err(flow_error_reply(&e))
        }
    }
}

pub async fn analyze_image(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeImageRequest>,
) -> Result<Json<AnalyzeImageReply>, ErrorReply> {
    let llm = require_llm(&state)?;
    match flows::image::describe_image(llm, &req.photo_data_uri).await {
        Ok(description) => Ok(Json(AnalyzeImageReply { description })),
        Err(e) => {
            warn!(error = %e, "image flow failed");
            Err(flow_error_reply(&e))
        }
    }
}

pub async fn summarize_article(
    State(state): State<AppState>,
    Json(req): Json<SummarizeArticleRequest>,
) -> Result<Json<SummarizeArticleReply>, ErrorReply> {
    let llm = require_llm(&state)?;
    match flows::summarize::summarize_article(llm, &req.article).await {
        Ok(summary) => Ok(Json(SummarizeArticleReply { summary })),
        Err(e) => {
            warn!(error = %e, "summarize flow failed");
            Err(flow_error_reply(&e))
        }
    }
}

fn require_llm(state: &AppState) -> Result<&dyn crate::llm::LlmChat, ErrorReply> {
    state.llm.as_deref().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody::from_message("AI features are not configured")),
        )
    })
}

fn flow_error_reply(err: &FlowError) -> ErrorReply {
    let status = match err {
        FlowError::EmptyInput(_) | FlowError::InvalidImageData(_) => StatusCode::BAD_REQUEST,
        FlowError::Llm(_) | FlowError::EmptyCompletion => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ErrorBody::from_message(err.to_string())))
}

#[cfg(test)]
#[path = "flows_test.rs"]
mod tests;
