//! Stylesheet injection.
//!
//! The widget ships one stylesheet compiled into the bundle. It is injected
//! into `<head>` once per page under a fixed element id.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "qdw-styles";

/// Widget stylesheet. Every selector is scoped under `.qdw-root`.
pub const STYLESHEET: &str = include_str!("../../style/widget.css");

/// CSS custom properties derived from the embed configuration.
#[must_use]
pub fn root_style(accent_color: &str) -> String {
    format!("--qdw-accent: {accent_color};")
}

/// Insert the stylesheet into `<head>` unless already present.
pub fn inject() {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if doc.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return;
        }
        let Some(head) = doc.head() else {
            return;
        };
        let Ok(style) = doc.create_element("style") else {
            return;
        };
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(STYLESHEET));
        let _ = head.append_child(&style);
    }
}
