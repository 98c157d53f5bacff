//! Toast rendering and the notify helper.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

/// Push a toast and schedule its timed dismissal.
///
/// Clicking the toast dismisses it early; the late timer then finds
/// nothing to remove.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, text: &str) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, text));

    #[cfg(feature = "csr")]
    {
        let delay = kind.duration_ms();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            toasts.update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Renders the toast stack from context. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.kind {
                            ToastKind::Info => "toast--info",
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        let text = toast.text.clone();
                        view! {
                            <div
                                class=format!("toast {kind_class}")
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                {text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
