//! Whitespace collapsing.
//!
//! Whitespace is whatever [`char::is_whitespace`] says it is, i.e. the
//! Unicode `White_Space` property. That covers the ASCII set (space, tab,
//! newline, vertical tab, form feed, carriage return) plus NEL, NBSP, the
//! U+2000 block of typographic spaces, line/paragraph separators and the
//! ideographic space. Zero-width characters such as U+200B are *not*
//! whitespace and survive as word content.
//!
//! ```rust
//! use canonical::normalize;
//!
//! assert_eq!(normalize("  hello   world  "), "hello world");
//! ```

/// Returns the maximal non-whitespace runs of `text`, in order.
///
/// ```rust
/// use canonical::words;
///
/// let found: Vec<&str> = words(" a\tb\n\nc ").collect();
/// assert_eq!(found, ["a", "b", "c"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Collapses whitespace runs to a single ASCII space and trims both edges.
///
/// Empty and whitespace-only input produce an empty string. A single word
/// with no surrounding whitespace comes back unchanged.
///
/// # Examples
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("hello   world"), "hello world");
/// assert_eq!(normalize("a\nb\tc"), "a b c");
/// assert_eq!(normalize("hello\r\nworld"), "hello world");
/// assert_eq!(normalize("   \n\t   "), "");
/// assert_eq!(normalize(""), "");
/// assert_eq!(normalize("hello\u{00A0}world"), "hello world");
/// ```
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in words(text) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}

/// Reports whether `text` is already in normalized form.
///
/// Equivalent to `normalize(text) == text` without allocating.
pub fn is_normalized(text: &str) -> bool {
    let mut prev_space = true;
    for ch in text.chars() {
        if ch == ' ' {
            if prev_space {
                return false;
            }
            prev_space = true;
        } else if ch.is_whitespace() {
            return false;
        } else {
            prev_space = false;
        }
    }
    // A trailing space leaves `prev_space` set; empty input is normalized.
    text.is_empty() || !prev_space
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" "), "");
        assert_eq!(normalize("\t\n\r\u{000B}\u{000C}"), "");
        assert_eq!(words("   ").count(), 0);
    }

    #[test]
    fn single_word_is_unchanged() {
        assert_eq!(normalize("hello"), "hello");
        assert_eq!(normalize("  hello  "), "hello");
    }

    #[test]
    fn unicode_spaces_are_separators() {
        assert_eq!(normalize("a\u{0085}b"), "a b");
        assert_eq!(normalize("a\u{2003}\u{2009}b"), "a b");
        assert_eq!(normalize("a\u{2028}b\u{2029}c"), "a b c");
        assert_eq!(normalize("a\u{3000}b"), "a b");
    }

    #[test]
    fn zero_width_space_is_content() {
        assert_eq!(normalize("a\u{200B}b  c"), "a\u{200B}b c");
    }

    #[test]
    fn is_normalized_matches_normalize() {
        let samples = [
            "",
            " ",
            "a",
            "a b",
            "a  b",
            " a",
            "a ",
            "a\tb",
            "a\u{00A0}b",
            "hello world again",
        ];
        for sample in samples {
            assert_eq!(
                is_normalized(sample),
                normalize(sample) == sample,
                "mismatch for {sample:?}"
            );
        }
    }
}
