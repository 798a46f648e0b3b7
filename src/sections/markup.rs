//! Minimal HTML writing helpers.

use std::fmt::Write as _;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<tag class="..">escaped text</tag>`
pub fn text_element(tag: &str, class: &str, text: &str) -> String {
    let mut out = String::new();
    if class.is_empty() {
        let _ = write!(out, "<{tag}>{}</{tag}>", escape_html(text));
    } else {
        let _ = write!(
            out,
            "<{tag} class=\"{}\">{}</{tag}>",
            escape_html(class),
            escape_html(text)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_text_element() {
        assert_eq!(text_element("h2", "", "A & B"), "<h2>A &amp; B</h2>");
        assert_eq!(
            text_element("span", "chip", "BIM"),
            "<span class=\"chip\">BIM</span>"
        );
    }
}
