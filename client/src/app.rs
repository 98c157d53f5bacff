//! Root component: shared context, the header, and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::analyze::AnalyzePage;
use crate::pages::chat::ChatPage;
use crate::pages::summarize::SummarizePage;
use crate::state::conversation::ConversationState;
use crate::state::toasts::ToastState;

/// Application root.
///
/// The conversation and toast signals live here, above the router, so
/// chat history and pending toasts survive page switches.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let conversation = RwSignal::new(ConversationState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(conversation);
    provide_context(toasts);

    view! {
        <Title text="Sage"/>

        <Router>
            <header class="app-header">
                <a class="app-header__brand" href="/">
                    "Sage"
                </a>
                <nav class="app-header__nav">
                    <a href="/">"Chat"</a>
                    <a href="/analyze">"Image Analysis"</a>
                    <a href="/summarize">"Summarization"</a>
                </nav>
            </header>

            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ChatPage/>
                    <Route path=StaticSegment("analyze") view=AnalyzePage/>
                    <Route path=StaticSegment("summarize") view=SummarizePage/>
                </Routes>
            </main>

            <ToastHost/>
        </Router>
    }
}
