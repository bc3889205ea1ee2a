//! Query and fragment validation.
//!
//! Both productions share the charset `pchar / "?" / "/"`. The difference
//! is the boundary rule: a `#` inside a query is a valid terminator that
//! hands the remainder to fragment validation, while a `#` inside a
//! fragment is an error.

use crate::chars;
use crate::error::{ParseError, ParseErrorKind};

/// Scans a query from `start` to the end of input.
///
/// Returns the offset of a terminating `#` if one occurs; exhausting the
/// input simply ends the query there.
pub(crate) fn validate_query(bytes: &[u8], start: usize) -> Result<Option<usize>, ParseError> {
    let mut i = start;
    while i < bytes.len() {
        if let Some(w) = chars::pchar_width(bytes, i) {
            i += w;
        } else {
            match bytes[i] {
                b'?' | b'/' => i += 1,
                b'#' => return Ok(Some(i)),
                _ => return Err(ParseError::new(i, ParseErrorKind::InvalidQuery)),
            }
        }
    }
    Ok(None)
}

/// Scans a fragment from `start` to the end of input. No boundary exception.
pub(crate) fn validate_fragment(bytes: &[u8], start: usize) -> Result<(), ParseError> {
    let mut i = start;
    while i < bytes.len() {
        if let Some(w) = chars::pchar_width(bytes, i) {
            i += w;
        } else {
            match bytes[i] {
                b'?' | b'/' => i += 1,
                _ => return Err(ParseError::new(i, ParseErrorKind::InvalidFragment)),
            }
        }
    }
    Ok(())
}

/// Returns true if `s` is valid query content (without the leading `?`).
#[must_use]
pub fn is_valid_query(s: &str) -> bool {
    matches!(validate_query(s.as_bytes(), 0), Ok(None))
}

/// Returns true if `s` is valid fragment content (without the leading `#`).
#[must_use]
pub fn is_valid_fragment(s: &str) -> bool {
    validate_fragment(s.as_bytes(), 0).is_ok()
}

/// Returns true if `s` is a valid path: `pchar` and `/` throughout.
#[must_use]
pub fn is_valid_path(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'/' {
            i += 1;
        } else if let Some(w) = chars::pchar_width(bytes, i) {
            i += w;
        } else {
            return false;
        }
    }
    true
}
