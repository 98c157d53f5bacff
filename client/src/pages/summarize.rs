//! Text summarization page.

use leptos::prelude::*;

use crate::components::summarize_panel::SummarizePanel;

#[component]
pub fn SummarizePage() -> impl IntoView {
    view! { <SummarizePanel/> }
}
