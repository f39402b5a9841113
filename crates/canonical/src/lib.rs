//! textproc canonical text layer.
//!
//! Collapses every run of whitespace in a string to a single ASCII space and
//! trims both edges. That is the whole transformation: word content is never
//! touched, so there is no case folding, Unicode normalization, or punctuation
//! handling here.
//!
//! ## Pure function guarantee
//!
//! No I/O, no allocation beyond the output string, no locale dependence.
//! [`normalize`] is total over `&str` and never fails.
//!
//! ## Invariants worth knowing
//!
//! - `normalize(normalize(s)) == normalize(s)`
//! - the words of `normalize(s)` are exactly [`words`]`(s)`, in order
//! - the output never starts or ends with a space and never holds two in a row

mod whitespace;

pub use crate::whitespace::{is_normalized, normalize, words};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize_default() {
        let input = "  Hello\nWORLD!  This is   textproc. ";
        assert_eq!(normalize(input), "Hello WORLD! This is textproc.");
    }

    #[test]
    fn word_content_is_untouched() {
        let input = "Caf\u{00E9}\t\tCAFE\u{0301}  it's,  100%";
        assert_eq!(normalize(input), "Caf\u{00E9} CAFE\u{0301} it's, 100%");
    }

    #[test]
    fn normalize_agrees_with_words() {
        let input = "\r\n alpha \u{2003} beta\u{00A0}gamma \n";
        let joined = words(input).collect::<Vec<_>>().join(" ");
        assert_eq!(normalize(input), joined);
        assert!(is_normalized(&joined));
    }
}
