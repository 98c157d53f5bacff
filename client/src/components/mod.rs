//! UI components.
//!
//! ARCHITECTURE
//! ============
//! Panels own their page's behavior end to end: they read the shared
//! signals from context, call the pure planners in `state`, and perform
//! the storage and network I/O those planners decide on. `MessageBubble`
//! and `ToastHost` are the shared rendering pieces.

pub mod analyze_panel;
pub mod chat_panel;
pub mod message_bubble;
pub mod summarize_panel;
pub mod toast;
