//! Assistant flows behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Flow modules own input validation and prompt assembly so route handlers
//! can stay focused on protocol translation. Each flow is a single
//! completion call: no tools, no multi-turn state.

pub mod chat;
pub mod image;
pub mod summarize;

use crate::llm::types::LlmError;

/// Completion budget shared by all three flows.
pub const MAX_COMPLETION_TOKENS: u32 = 4096;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The request carried nothing to work on.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
    /// The uploaded image payload is not a base64 data URI.
    #[error("invalid image data: {0}")]
    InvalidImageData(String),
    /// The provider call failed.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    /// The provider answered 200 with no usable text.
    #[error("model returned an empty completion")]
    EmptyCompletion,
}
