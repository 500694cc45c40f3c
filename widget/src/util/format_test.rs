use super::*;

#[test]
fn plain_text_becomes_paragraph() {
    assert_eq!(render_message_html("hello"), "<p>hello</p>\n");
}

#[test]
fn block_html_is_escaped() {
    let html = render_message_html("<script>alert(1)</script>");
    assert!(html.contains("&lt;script&gt;"), "{html}");
    assert!(!html.contains("<script"), "{html}");
}

#[test]
fn inline_html_is_escaped() {
    let html = render_message_html("hi <b onclick=\"x()\">there</b>");
    assert!(html.contains("&lt;b onclick="), "{html}");
    assert!(!html.contains("<b "), "{html}");
}

#[test]
fn bare_urls_become_new_tab_links() {
    let html = render_message_html("Docs: https://example.com/docs.");
    assert!(
        html.contains(
            r#"<a target="_blank" rel="noopener noreferrer" href="https://example.com/docs">https://example.com/docs</a>."#
        ),
        "{html}"
    );
}

#[test]
fn markdown_links_open_in_new_tab() {
    let html = render_message_html("[site](https://example.com)");
    assert!(html.contains(r#"target="_blank""#), "{html}");
    assert!(html.contains(r#"href="https://example.com""#), "{html}");
}

#[test]
fn script_scheme_links_keep_only_label() {
    let html = render_message_html("[click me](javascript:alert(1))");
    assert!(html.contains("click me"), "{html}");
    assert!(!html.contains("href"), "{html}");
}

#[test]
fn light_markdown_is_rendered() {
    let html = render_message_html("**bold** and *soft* and ~~gone~~ and `code`");
    assert!(html.contains("<strong>bold</strong>"), "{html}");
    assert!(html.contains("<em>soft</em>"), "{html}");
    assert!(html.contains("<del>gone</del>"), "{html}");
    assert!(html.contains("<code>code</code>"), "{html}");
}

#[test]
fn single_newlines_are_preserved() {
    let html = render_message_html("line one\nline two");
    assert!(html.contains("<br />"), "{html}");
}

#[test]
fn urls_in_code_are_not_linked() {
    let html = render_message_html("```\nhttps://example.com\n```\n\n`https://example.org`");
    assert!(!html.contains("<a "), "{html}");
}

#[test]
fn images_are_reduced_to_alt_text() {
    let html = render_message_html("![a cat](https://example.com/cat.png)");
    assert!(!html.contains("<img"), "{html}");
    assert!(html.contains("a cat"), "{html}");
}

#[test]
fn split_urls_separates_text_and_links() {
    assert_eq!(
        split_urls("see https://a.io/x, then http://b.io"),
        vec![
            Segment::Text("see "),
            Segment::Url("https://a.io/x"),
            Segment::Text(", then "),
            Segment::Url("http://b.io"),
        ]
    );
}

#[test]
fn split_urls_leaves_bare_scheme_as_text() {
    assert_eq!(split_urls("http:// alone"), vec![Segment::Text("http://"), Segment::Text(" alone")]);
}

#[test]
fn split_urls_without_urls_is_single_segment() {
    assert_eq!(split_urls("nothing here"), vec![Segment::Text("nothing here")]);
}
