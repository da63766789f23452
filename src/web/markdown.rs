// Markdown rendering for assistant replies

use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown to HTML; raw HTML in the source is shown as text
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let out = render_markdown("Use **compost** and:\n\n- mulch\n- cover crops");
        assert!(out.contains("<strong>compost</strong>"));
        assert!(out.contains("<li>mulch</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_markdown("hi <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_plain_text_is_paragraph() {
        assert_eq!(render_markdown("Plant in June."), "<p>Plant in June.</p>\n");
    }
}
