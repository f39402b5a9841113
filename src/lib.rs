//! Workspace umbrella crate for the textproc whitespace service.
//!
//! This crate sits between the pure normalizer in `canonical` and the HTTP
//! surface in `server`: it owns the one input rule the service enforces
//! (there has to be *some* text) and leaves transport concerns to the caller.

pub use canonical::{is_normalized, normalize, words};

use std::borrow::Cow;
use thiserror::Error;

/// Errors produced while processing a text payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError {
    /// The payload was absent or the empty string.
    #[error("No text provided")]
    NoText,
}

/// Validates `text` and returns its whitespace-normalized form.
///
/// Only the empty string is rejected. Whitespace-only input is valid and
/// normalizes to an empty string.
///
/// ```rust
/// use textproc::{process_text, ProcessError};
///
/// assert_eq!(process_text("hello   world").unwrap(), "hello world");
/// assert_eq!(process_text("   ").unwrap(), "");
/// assert_eq!(process_text(""), Err(ProcessError::NoText));
/// ```
pub fn process_text(text: &str) -> Result<String, ProcessError> {
    if text.is_empty() {
        return Err(ProcessError::NoText);
    }

    let processed = normalize_cow(text);
    tracing::debug!(
        input_bytes = text.len(),
        output_bytes = processed.len(),
        unchanged = matches!(processed, Cow::Borrowed(_)),
        "text processed"
    );
    Ok(processed.into_owned())
}

/// Like [`normalize`], but borrows when the input is already normalized.
pub fn normalize_cow(text: &str) -> Cow<'_, str> {
    if is_normalized(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(normalize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(process_text(""), Err(ProcessError::NoText));
        assert_eq!(ProcessError::NoText.to_string(), "No text provided");
    }

    #[test]
    fn normalized_input_is_borrowed() {
        assert!(matches!(normalize_cow("a b c"), Cow::Borrowed("a b c")));
        assert!(matches!(normalize_cow(""), Cow::Borrowed("")));
    }

    #[test]
    fn dirty_input_is_owned() {
        match normalize_cow("  a   b ") {
            Cow::Owned(s) => assert_eq!(s, "a b"),
            Cow::Borrowed(s) => panic!("expected owned output, got {s:?}"),
        }
    }
}
