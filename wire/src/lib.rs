//! Shared request/response types for the Sage HTTP API.
//!
//! This crate owns the JSON contract used by both `server` and `client`.
//! Field names follow the public API shape (camelCase where the endpoint
//! expects it), so handlers and the browser client deserialize the same
//! bytes without per-side aliasing.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question, verbatim.
    pub query: String,
}

/// Successful reply from `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant completion text.
    pub response: String,
}

/// Body of `POST /api/analyze-image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeImageRequest {
    /// Image as a base64 `data:` URI, e.g. `data:image/png;base64,...`.
    #[serde(rename = "photoDataUri")]
    pub photo_data_uri: String,
}

/// Successful reply from `POST /api/analyze-image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeImageReply {
    /// Natural-language description of the image.
    pub description: String,
}

/// Body of `POST /api/summarize-article`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeArticleRequest {
    /// Full article text to condense.
    pub article: String,
}

/// Successful reply from `POST /api/summarize-article`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeArticleReply {
    /// Condensed summary text.
    pub summary: String,
}

/// Error payload returned by every endpoint on non-success statuses.
///
/// Both fields are optional because upstream proxies and older handlers
/// disagree on the field name; [`ErrorBody::detail`] picks whichever one
/// actually carries text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Build a body with the canonical `message` field set.
    #[must_use]
    pub fn from_message(text: impl Into<String>) -> Self {
        Self {
            error: None,
            message: Some(text.into()),
        }
    }

    /// The human-readable detail, preferring `error` over `message` and
    /// skipping fields that are present but blank.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
