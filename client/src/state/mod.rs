//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each module pairs a plain state struct with the pure transition
//! functions that drive it. Components own the `RwSignal` wrappers and
//! call these functions inside `update`, so every rule here is testable
//! without a browser.

pub mod conversation;
pub mod toasts;
