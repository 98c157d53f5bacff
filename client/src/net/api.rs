//! HTTP calls to the flow endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<String, ApiFailure>`. Transport faults,
//! non-success statuses, and success bodies with nothing usable in them
//! are folded into the one closed failure type, so panels settle every
//! submission through the same path.

#![allow(clippy::unused_async)]

#[cfg(any(test, feature = "csr"))]
use wire::{AnalyzeImageReply, ChatReply, ErrorBody, SummarizeArticleReply};

#[cfg(feature = "csr")]
use wire::{AnalyzeImageRequest, ChatRequest, SummarizeArticleRequest};

/// Why a flow call produced no usable text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiFailure {
    /// The request never completed: network failure, or the request
    /// could not even be built.
    Transport(String),
    /// The server answered with a non-success status. `message` is the
    /// detail from the error body, when one could be decoded.
    Upstream { status: u16, message: Option<String> },
    /// The server answered with success but the payload field was
    /// missing or empty.
    EmptyResponse,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(detail) => write!(f, "{detail}"),
            Self::Upstream { status, message } => {
                write!(f, "API Error: {status}.")?;
                if let Some(message) = message {
                    write!(f, " {message}")?;
                }
                Ok(())
            }
            Self::EmptyResponse => write!(f, "Received an empty response from Sage."),
        }
    }
}

/// `POST /api/chat` with the user's query; returns the reply text.
pub async fn post_chat(query: &str) -> Result<String, ApiFailure> {
    #[cfg(feature = "csr")]
    {
        let request = ChatRequest {
            query: query.to_owned(),
        };
        let (status, ok, body) = post_json("/api/chat", &request).await?;
        decode_chat(status, ok, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(not_in_browser())
    }
}

/// `POST /api/analyze-image` with a base64 data URI; returns the
/// description text.
pub async fn post_analyze_image(photo_data_uri: &str) -> Result<String, ApiFailure> {
    #[cfg(feature = "csr")]
    {
        let request = AnalyzeImageRequest {
            photo_data_uri: photo_data_uri.to_owned(),
        };
        let (status, ok, body) = post_json("/api/analyze-image", &request).await?;
        decode_analyze(status, ok, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = photo_data_uri;
        Err(not_in_browser())
    }
}

/// `POST /api/summarize-article` with the raw article text; returns the
/// summary text.
pub async fn post_summarize_article(article: &str) -> Result<String, ApiFailure> {
    #[cfg(feature = "csr")]
    {
        let request = SummarizeArticleRequest {
            article: article.to_owned(),
        };
        let (status, ok, body) = post_json("/api/summarize-article", &request).await?;
        decode_summarize(status, ok, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = article;
        Err(not_in_browser())
    }
}

// ===== DECODING =====

#[cfg(any(test, feature = "csr"))]
fn decode_chat(status: u16, ok: bool, body: &str) -> Result<String, ApiFailure> {
    decode_reply(status, ok, body, |reply: ChatReply| reply.response)
}

#[cfg(any(test, feature = "csr"))]
fn decode_analyze(status: u16, ok: bool, body: &str) -> Result<String, ApiFailure> {
    decode_reply(status, ok, body, |reply: AnalyzeImageReply| {
        reply.description
    })
}

#[cfg(any(test, feature = "csr"))]
fn decode_summarize(status: u16, ok: bool, body: &str) -> Result<String, ApiFailure> {
    decode_reply(status, ok, body, |reply: SummarizeArticleReply| {
        reply.summary
    })
}

/// Shared decode path: non-success statuses carry whatever detail the
/// error body held, and a success body must yield non-blank payload text.
#[cfg(any(test, feature = "csr"))]
fn decode_reply<T, F>(status: u16, ok: bool, body: &str, pick: F) -> Result<String, ApiFailure>
where
    T: serde::de::DeserializeOwned,
    F: FnOnce(T) -> String,
{
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|reply| reply.detail().map(str::to_owned));
        return Err(ApiFailure::Upstream { status, message });
    }

    let Ok(reply) = serde_json::from_str::<T>(body) else {
        return Err(ApiFailure::EmptyResponse);
    };
    let text = pick(reply);
    if text.trim().is_empty() {
        return Err(ApiFailure::EmptyResponse);
    }
    Ok(text)
}

// ===== TRANSPORT =====

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<(u16, bool, String), ApiFailure> {
    let response = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiFailure::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;
    Ok((status, ok, body))
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiFailure {
    ApiFailure::Transport("not running in a browser".to_owned())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
