//! HTML entity encoding, used for all text and attribute values
//! unless explicitly marked as trusted.

use std::borrow::Cow;

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None
    }
}

/// Append `s` to `out`, encoding `& < > " '`.
pub fn html_escape_into(s: &str, out: &mut String) {
    let mut done = 0;
    for (i, c) in s.char_indices() {
        if let Some(ent) = entity(c) {
            out.push_str(&s[done..i]);
            out.push_str(ent);
            done = i + 1; // all escaped chars are ASCII
        }
    }
    out.push_str(&s[done..]);
}

/// Returns `s` itself if nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<str> {
    if s.chars().any(|c| entity(c).is_some()) {
        let mut out = String::with_capacity(s.len() + 16);
        html_escape_into(s, &mut out);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_html_escape() {
        assert_eq!(html_escape("plain"), "plain");
        assert!(matches!(html_escape("plain"), Cow::Borrowed(_)));
        assert_eq!(html_escape("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
        assert_eq!(html_escape("a & \"b\" 'c'"), "a &amp; &quot;b&quot; &#39;c&#39;");
        assert_eq!(html_escape("Motörhead <3"), "Motörhead &lt;3");
        assert_eq!(html_escape(""), "");
    }

    #[test]
    fn t_never_emits_raw_specials() {
        for s in ["<script>alert(1)</script>", "\"><img src=x onerror=y>",
                  "' OR 1=1 --", "&&&", "<<>>"] {
            let e = html_escape(s);
            assert!(!e.contains('<'));
            assert!(!e.contains('>'));
            assert!(!e.contains('"'));
            assert!(!e.contains('\''));
            assert!(!e.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "")
                    .replace("&quot;", "").replace("&#39;", "").contains('&'));
        }
    }
}
