//! Entity escaping for attribute values and text content

use std::borrow::Cow;

const fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '"' => Some("&quot;"),
        '&' => Some("&amp;"),
        '\'' => Some("&apos;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

/// Replace the five reserved XML characters with entity references.
///
/// Every other character, including non-ASCII text, is copied unchanged.
/// Input without reserved characters is returned borrowed.
pub fn escape(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(|ch| entity(ch).is_some()) else {
        return Cow::Borrowed(input);
    };

    let (clean, rest) = input.split_at(first);
    let mut output = String::with_capacity(input.len() + 8);
    output.push_str(clean);
    for ch in rest.chars() {
        match entity(ch) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(ch),
        }
    }
    Cow::Owned(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape("\""), "&quot;");
        assert_eq!(escape("&"), "&amp;");
        assert_eq!(escape("'"), "&apos;");
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape(">"), "&gt;");
    }

    #[test]
    fn test_escape_mixed_text() {
        assert_eq!(
            escape(r#"/search?q=<rust>&lang="en"'s"#),
            "/search?q=&lt;rust&gt;&amp;lang=&quot;en&quot;&apos;s"
        );
    }

    #[test]
    fn test_escape_does_not_collapse_existing_entities() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_keeps_non_ascii() {
        assert_eq!(escape("/ブログ/記事 & ノート"), "/ブログ/記事 &amp; ノート");
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape("https://example.com/"), Cow::Borrowed(_)));
        assert!(matches!(escape(""), Cow::Borrowed("")));
        assert!(matches!(escape("a<b"), Cow::Owned(_)));
    }
}
