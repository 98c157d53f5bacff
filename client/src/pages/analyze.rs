//! Image analysis page.

use leptos::prelude::*;

use crate::components::analyze_panel::AnalyzePanel;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    view! { <AnalyzePanel/> }
}
