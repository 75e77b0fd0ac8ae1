//! Path validation and sanitization
//!
//! Applied before any session state is created or any I/O is attempted.

use crate::HashError;

/// Characters never allowed in a file path input.
const DISALLOWED: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Validate a raw path input and return the sanitized form.
///
/// The input must be non-empty after trimming, contain none of
/// `< > : " | ? *`, and look like a path: either carry a separator or a
/// `.` extension marker. Quote characters are stripped from the accepted
/// value before it is used.
///
/// # Errors
/// Returns [`HashError::InvalidPath`] describing the first failed rule.
pub(crate) fn sanitize_path_input(raw: &str) -> Result<String, HashError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HashError::InvalidPath("path is empty".to_string()));
    }

    if let Some(c) = trimmed.chars().find(|c| DISALLOWED.contains(c)) {
        return Err(HashError::InvalidPath(format!(
            "path contains disallowed character {c:?}"
        )));
    }

    let looks_like_path =
        trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains('.');
    if !looks_like_path {
        return Err(HashError::InvalidPath(
            "path has no separator or file extension".to_string(),
        ));
    }

    Ok(trimmed.chars().filter(|c| *c != '\'').collect())
}
