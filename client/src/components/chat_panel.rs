//! Chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the full submit path: plan the submission, append what the plan
//! hands back, run the one network call a `Remote` plan asks for, and
//! persist after every append so a refresh never loses a landed message.
//! The Clear and Download header actions live here too.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::components::toast::notify;
use crate::state::conversation::{
    ClearOutcome, ConversationState, SubmitPlan, clear_messages, plan_submission,
};
#[cfg(feature = "csr")]
use crate::state::conversation::settle_submission;
use crate::state::toasts::{ToastKind, ToastState};
use crate::util::clock::{now_label, now_ms};
use crate::util::storage::{load_history, save_history};
use crate::util::transcript::{ExportPlan, TRANSCRIPT_FILE_NAME, download_text_file, plan_export};

/// Cap for the composer's auto-grow, in pixels.
#[cfg(feature = "csr")]
const INPUT_MAX_HEIGHT_PX: i32 = 120;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // One-time import from storage. The conversation signal lives at the
    // app root, so remounting the page must not stomp on live state.
    Effect::new(move || {
        conversation.update(|state| {
            if state.messages.is_empty() && !state.loading {
                state.messages = load_history();
            }
        });
    });

    // Keep the list pinned to the newest message.
    Effect::new(move || {
        let state = conversation.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_submit = move || {
        let plan = plan_submission(&conversation.get(), &input.get(), now_ms());
        match plan {
            SubmitPlan::Rejected => {}
            SubmitPlan::Fixture { user, reply } => {
                conversation.update(|state| {
                    state.messages.push(user);
                    state.messages.push(reply);
                });
                save_history(&conversation.get().messages);
                reset_composer(input, input_ref);
            }
            SubmitPlan::Remote { user, query } => {
                conversation.update(|state| {
                    state.messages.push(user);
                    state.loading = true;
                });
                save_history(&conversation.get().messages);
                reset_composer(input, input_ref);

                #[cfg(feature = "csr")]
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = crate::net::api::post_chat(&query).await;
                    let reply = settle_submission(outcome, now_ms());
                    conversation.update(|state| {
                        state.messages.push(reply);
                        state.loading = false;
                    });
                    save_history(&conversation.get().messages);
                });
                #[cfg(not(feature = "csr"))]
                let _ = query;
            }
        }
    };

    let on_input = move |ev| {
        input.set(event_target_value(&ev));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.style().set_property("height", "auto");
                let height = el.scroll_height().min(INPUT_MAX_HEIGHT_PX);
                let _ = el.style().set_property("height", &format!("{height}px"));
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    let on_clear = move |_| {
        let mut outcome = ClearOutcome::AlreadyEmpty;
        conversation.update(|state| outcome = clear_messages(state));
        match outcome {
            ClearOutcome::AlreadyEmpty => {
                notify(toasts, ToastKind::Info, "Chat is already empty!");
            }
            ClearOutcome::Cleared => {
                save_history(&[]);
                notify(toasts, ToastKind::Success, "Chat cleared!");
            }
        }
    };

    let on_download = move |_| {
        match plan_export(&conversation.get().messages, &now_label()) {
            ExportPlan::Empty => notify(toasts, ToastKind::Info, "No messages to download."),
            ExportPlan::Download { text } => {
                download_text_file(TRANSCRIPT_FILE_NAME, &text);
                notify(toasts, ToastKind::Success, "Chat history download started!");
            }
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !conversation.get().loading;

    view! {
        <section class="chat">
            <header class="chat__header">
                <h1 class="chat__title">"Chat with Sage"</h1>
                <div class="chat__actions">
                    <button class="btn chat__action" title="Clear chat" on:click=on_clear>
                        "Clear"
                    </button>
                    <button class="btn chat__action" title="Download chat history" on:click=on_download>
                        "Download"
                    </button>
                </div>
            </header>

            <div class="chat__messages" node_ref=messages_ref>
                {move || {
                    let state = conversation.get();
                    if state.messages.is_empty() && !state.loading {
                        return view! {
                            <div class="chat__empty">"Start a conversation with Sage!"</div>
                        }
                            .into_any();
                    }
                    state
                        .messages
                        .iter()
                        .map(|message| view! { <MessageBubble message=message.clone()/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    conversation
                        .get()
                        .loading
                        .then(|| view! { <div class="chat__loading">"Thinking..."</div> })
                }}
            </div>

            <form
                class="chat__composer"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    do_submit();
                }
            >
                <textarea
                    class="chat__input"
                    placeholder="Ask Sage anything..."
                    rows=1
                    node_ref=input_ref
                    prop:value=move || input.get()
                    disabled=move || conversation.get().loading
                    on:input=on_input
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary chat__send" type="submit" disabled=move || !can_send()>
                    "Send"
                </button>
            </form>
        </section>
    }
}

/// Clear the composer, reset its auto-grow height, and restore focus.
fn reset_composer(input: RwSignal<String>, input_ref: NodeRef<leptos::html::Textarea>) {
    input.set(String::new());

    #[cfg(feature = "csr")]
    {
        if let Some(el) = input_ref.get() {
            let _ = el.style().set_property("height", "auto");
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
}
