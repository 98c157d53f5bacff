//! Route-level pages. Each one is a thin wrapper around its panel.

pub mod analyze;
pub mod chat;
pub mod summarize;
