//! Image analysis panel.
//!
//! Upload flow: pick an image, preview it from the encoded data URI, then
//! send that same URI to the analyze endpoint. Non-image picks are
//! rejected up front with an error toast and the input reset.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::toast::notify;
#[cfg(feature = "csr")]
use crate::state::toasts::{ToastKind, ToastState};

#[component]
pub fn AnalyzePanel() -> impl IntoView {
    #[cfg(feature = "csr")]
    let toasts = expect_context::<RwSignal<ToastState>>();

    let data_uri = RwSignal::new(Option::<String>::None);
    let outcome = RwSignal::new(Option::<Result<String, String>>::None);
    let loading = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input_el) = file_ref.get() else {
                return;
            };
            let Some(file) = input_el.files().and_then(|files| files.get(0)) else {
                data_uri.set(None);
                return;
            };
            if !crate::util::files::is_image_mime(&file.type_()) {
                input_el.set_value("");
                data_uri.set(None);
                notify(
                    toasts,
                    ToastKind::Error,
                    "Invalid file type. Please select an image.",
                );
                return;
            }
            outcome.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::util::files::file_to_data_uri(&file).await {
                    Ok(uri) => data_uri.set(Some(uri)),
                    Err(detail) => {
                        data_uri.set(None);
                        notify(toasts, ToastKind::Error, &detail);
                    }
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let Some(uri) = data_uri.get() else {
            return;
        };
        loading.set(true);
        outcome.set(None);

        #[cfg(feature = "csr")]
        wasm_bindgen_futures::spawn_local(async move {
            match crate::net::api::post_analyze_image(&uri).await {
                Ok(description) => {
                    outcome.set(Some(Ok(description)));
                    notify(toasts, ToastKind::Success, "Analysis complete!");
                }
                Err(failure) => {
                    outcome.set(Some(Err(format!("Failed to analyze image. {failure}"))));
                    notify(toasts, ToastKind::Error, "Error analyzing image.");
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = uri;
            loading.set(false);
        }
    };

    view! {
        <section class="analyze">
            <h1 class="analyze__title">"Image Analysis"</h1>
            <p class="analyze__hint">"Upload an image and Sage will describe what it sees."</p>

            <form class="analyze__form" on:submit=on_submit>
                <input
                    class="analyze__file"
                    type="file"
                    accept="image/*"
                    node_ref=file_ref
                    disabled=move || loading.get()
                    on:change=on_file_change
                />

                {move || {
                    data_uri.get().map(|uri| view! {
                        <div class="analyze__preview">
                            <img src=uri alt="Selected image preview"/>
                        </div>
                    })
                }}

                <button
                    class="btn btn--primary analyze__submit"
                    type="submit"
                    disabled=move || loading.get() || data_uri.get().is_none()
                >
                    "Analyze Image"
                </button>
            </form>

            {move || {
                loading
                    .get()
                    .then(|| view! { <div class="analyze__loading">"Analyzing image..."</div> })
            }}
            {move || {
                outcome.get().map(|result| match result {
                    Ok(description) => view! {
                        <div class="analyze__result">
                            <h2>"Analysis Result"</h2>
                            <p>{description}</p>
                        </div>
                    }
                        .into_any(),
                    Err(text) => view! {
                        <div class="analyze__result analyze__result--error">{text}</div>
                    }
                        .into_any(),
                })
            }}
        </section>
    }
}
