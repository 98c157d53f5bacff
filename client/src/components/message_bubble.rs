//! A single chat message row.

use leptos::prelude::*;

use crate::state::conversation::{ChatMessage, Role};
use crate::util::clock::format_hhmm;
use crate::util::markdown::render_markdown_html;

/// Avatar-plus-bubble row for one message.
///
/// Assistant content renders as sanitized markdown; user content renders
/// as literal text with explicit line breaks, never as markup.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.role == Role::Assistant;
    let time = format_hhmm(&message.id);

    let body = if is_assistant {
        let rendered = render_markdown_html(&message.content);
        view! { <div class="message__markdown" inner_html=rendered></div> }.into_any()
    } else {
        literal_lines(&message.content).into_any()
    };

    view! {
        <div class="message" class:message--assistant=is_assistant class:message--user=!is_assistant>
            {is_assistant.then(|| view! { <div class="message__avatar">"S"</div> })}
            <div class="message__bubble">
                {body}
                <span class="message__time">{time}</span>
            </div>
            {(!is_assistant).then(|| view! { <div class="message__avatar">"U"</div> })}
        </div>
    }
}

/// User text as-is, with newlines mapped to `<br>`.
fn literal_lines(content: &str) -> impl IntoView {
    let lines: Vec<String> = content.split('\n').map(str::to_owned).collect();
    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            view! {
                <span>{line}</span>
                {(index < last).then(|| view! { <br/> })}
            }
        })
        .collect::<Vec<_>>()
}
