//! HTML helper functions

/// Escape HTML special characters, quotes included
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag with a class attribute
///
/// `href` and `text` are expected to be escaped already.
pub fn link_to(href: &str, text: &str, class: &str) -> String {
    format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, text)
}
