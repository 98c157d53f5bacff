//! Text summarization panel.

use leptos::prelude::*;

use crate::components::toast::notify;
use crate::state::toasts::{ToastKind, ToastState};

#[component]
pub fn SummarizePanel() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let input = RwSignal::new(String::new());
    let outcome = RwSignal::new(Option::<Result<String, String>>::None);
    let loading = RwSignal::new(false);

    // Clearing the text while idle also clears the stale result, so the
    // placeholder comes back instead of a leftover summary.
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        if value.trim().is_empty() && !loading.get() {
            outcome.set(None);
        }
        input.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let article = input.get();
        if article.trim().is_empty() {
            notify(toasts, ToastKind::Info, "Please enter text to summarize.");
            return;
        }
        loading.set(true);
        outcome.set(None);

        #[cfg(feature = "csr")]
        wasm_bindgen_futures::spawn_local(async move {
            match crate::net::api::post_summarize_article(&article).await {
                Ok(summary) => {
                    outcome.set(Some(Ok(summary)));
                    notify(toasts, ToastKind::Success, "Summarization complete!");
                }
                Err(failure) => {
                    outcome.set(Some(Err(format!("Failed to summarize text. {failure}"))));
                    notify(toasts, ToastKind::Error, "Error summarizing text.");
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = article;
            loading.set(false);
        }
    };

    view! {
        <section class="summarize">
            <h1 class="summarize__title">"Text Summarization"</h1>
            <p class="summarize__hint">"Paste an article and Sage will boil it down to a paragraph."</p>

            <form class="summarize__form" on:submit=on_submit>
                <textarea
                    class="summarize__input"
                    placeholder="Paste the text to summarize..."
                    rows=10
                    prop:value=move || input.get()
                    disabled=move || loading.get()
                    on:input=on_input
                ></textarea>
                <button
                    class="btn btn--primary summarize__submit"
                    type="submit"
                    disabled=move || loading.get()
                >
                    "Summarize"
                </button>
            </form>

            <div class="summarize__result">
                {move || {
                    if loading.get() {
                        return view! { <p class="summarize__loading">"Summarizing..."</p> }.into_any();
                    }
                    match outcome.get() {
                        Some(Ok(summary)) => view! { <p>{summary}</p> }.into_any(),
                        Some(Err(text)) => {
                            view! { <p class="summarize__error">{text}</p> }.into_any()
                        }
                        None => view! {
                            <p class="summarize__placeholder">"Your summary will appear here."</p>
                        }
                            .into_any(),
                    }
                }}
            </div>
        </section>
    }
}
