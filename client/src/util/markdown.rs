//! Markdown rendering for assistant messages.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render assistant markdown to HTML.
///
/// Raw HTML in the model's output is dropped before rendering, and links
/// are rewritten to open in a new tab. User messages never come through
/// here; they render as literal text.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);

    // pulldown-cmark has no per-link attribute hook; patch the serialized
    // anchors instead. Escaped text can never contain a literal `<a href=`.
    out.replace(
        "<a href=",
        "<a target=\"_blank\" rel=\"noopener noreferrer\" href=",
    )
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
