use super::*;

#[test]
fn renders_emphasis_and_headings() {
    let html = render_markdown_html("# Title\n\n**bold** and *italic*");

    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<em>italic</em>"));
}

#[test]
fn renders_nested_and_ordered_lists() {
    let html = render_markdown_html("- Item 1\n- Item 2\n  - Sub-item 2.1\n\n1. First\n2. Second");

    assert!(html.contains("<ul>"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<li>Sub-item 2.1</li>"));
}

#[test]
fn renders_fenced_code_with_language_class() {
    let html = render_markdown_html("```javascript\nconsole.log('hi');\n```");

    assert!(html.contains(r#"<pre><code class="language-javascript">"#));
    assert!(html.contains("console.log"));
}

#[test]
fn renders_blockquote_and_rule() {
    let html = render_markdown_html("> quoted\n\n---");

    assert!(html.contains("<blockquote>"));
    assert!(html.contains("<hr"));
}

#[test]
fn strips_raw_html_blocks() {
    let html = render_markdown_html("before\n\n<script>alert('x')</script>\n\nafter");

    assert!(!html.contains("<script"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn strips_inline_html_but_keeps_text() {
    let html = render_markdown_html("a <b>bold</b> word");

    assert!(!html.contains("<b>"));
    assert!(html.contains("bold"));
}

#[test]
fn escaped_markup_in_code_spans_survives() {
    let html = render_markdown_html("`<a href=\"x\">`");

    assert!(html.contains("&lt;a href="));
}

#[test]
fn links_open_in_a_new_tab() {
    let html = render_markdown_html("[Google](https://www.google.com)");

    assert!(html.contains(r#"<a target="_blank" rel="noopener noreferrer" href="https://www.google.com">Google</a>"#));
}
