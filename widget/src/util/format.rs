//! Message text → HTML rendering shared by every transcript path.
//!
//! Light markdown via `pulldown-cmark`, with three adjustments for untrusted
//! text: raw HTML is escaped rather than passed through, bare `http(s)://`
//! URLs become links, and links with script-capable schemes are reduced to
//! their label. Single newlines are kept as line breaks.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Render `text` to an HTML fragment safe to inject into the widget.
pub fn render_message_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut events: Vec<Event<'_>> = Vec::new();
    // One entry per open link: whether its start tag was emitted.
    let mut open_links: Vec<bool> = Vec::new();
    let mut code_depth = 0_usize;

    for event in TextMergeStream::new(Parser::new_ext(text, options)) {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::SoftBreak => events.push(Event::HardBreak),
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                let keep = is_safe_url(&dest_url);
                open_links.push(keep);
                if keep {
                    events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                }
            }
            Event::End(TagEnd::Link) => {
                if open_links.pop().unwrap_or(false) {
                    events.push(Event::End(TagEnd::Link));
                }
            }
            // Remote images are not loaded into the host page; alt text stays.
            Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => {}
            Event::Start(Tag::CodeBlock(kind)) => {
                code_depth += 1;
                events.push(Event::Start(Tag::CodeBlock(kind)));
            }
            Event::End(TagEnd::CodeBlock) => {
                code_depth = code_depth.saturating_sub(1);
                events.push(Event::End(TagEnd::CodeBlock));
            }
            Event::Text(t) if code_depth == 0 && open_links.is_empty() => push_linkified(&mut events, t),
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    // Text is escaped, so every literal `<a href="` here is one we emitted.
    out.replace("<a href=\"", "<a target=\"_blank\" rel=\"noopener noreferrer\" href=\"")
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    !UNSAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

fn push_linkified<'a>(events: &mut Vec<Event<'a>>, text: CowStr<'a>) {
    if find_url_start(&text).is_none() {
        events.push(Event::Text(text));
        return;
    }
    for segment in split_urls(&text) {
        match segment {
            Segment::Text(t) => events.push(Event::Text(CowStr::from(t.to_owned()))),
            Segment::Url(url) => {
                events.push(Event::Start(Tag::Link {
                    link_type: LinkType::Autolink,
                    dest_url: CowStr::from(url.to_owned()),
                    title: CowStr::Borrowed(""),
                    id: CowStr::Borrowed(""),
                }));
                events.push(Event::Text(CowStr::from(url.to_owned())));
                events.push(Event::End(TagEnd::Link));
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Url(&'a str),
}

fn find_url_start(text: &str) -> Option<usize> {
    match (text.find("http://"), text.find("https://")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Split plain text into text and bare-URL segments. Trailing sentence
/// punctuation is left outside the URL.
fn split_urls(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(start) = find_url_start(rest) {
        let candidate = &rest[start..];
        let end = candidate
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
            .unwrap_or(candidate.len());
        let url = candidate[..end].trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '\'']);
        let scheme_len = if url.starts_with("https://") { 8 } else { 7 };

        if url.len() <= scheme_len {
            // A bare scheme with no host stays text.
            let consumed = start + scheme_len.min(candidate.len());
            out.push(Segment::Text(&rest[..consumed]));
            rest = &rest[consumed..];
            continue;
        }
        if start > 0 {
            out.push(Segment::Text(&rest[..start]));
        }
        out.push(Segment::Url(url));
        rest = &rest[start + url.len()..];
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}
