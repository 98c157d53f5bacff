//! Chat page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! { <ChatPanel/> }
}
