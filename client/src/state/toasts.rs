//! Toast notification queue.
//!
//! Pure queue semantics live here so the dismissal rules test natively;
//! `components::toast` owns rendering and the expiry timers.

/// Toast severity. Selects styling and the auto-dismiss delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// How long a toast of this kind stays up, in milliseconds. Errors
    /// linger longer so they can actually be read.
    #[must_use]
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Info | Self::Success => 3_000,
            Self::Error => 5_000,
        }
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Live toasts in arrival order.
///
/// `dismiss` is idempotent: a click and the expiry timer can both fire
/// for the same toast, and ids are never reused within a session.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
#[path = "toasts_test.rs"]
mod tests;
