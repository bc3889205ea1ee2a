//! Scheme recognition.
//!
//! `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, terminated by `:`.

use crate::chars;
use crate::error::{ParseError, ParseErrorKind};

/// Scans the scheme at the start of `bytes`.
///
/// Returns the offset of the `:` delimiter; the scheme span is `[0, colon)`
/// and the cursor resumes at `colon + 1`.
pub(crate) fn validate(bytes: &[u8]) -> Result<usize, ParseError> {
    match bytes.first() {
        None => return Err(ParseError::new(0, ParseErrorKind::Truncated)),
        Some(&b) if !chars::is_alpha(b) => {
            return Err(ParseError::new(0, ParseErrorKind::InvalidScheme));
        }
        Some(_) => {}
    }

    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if b == b':' {
            return Ok(i);
        }
        if !chars::is_scheme_char(b) {
            return Err(ParseError::new(i, ParseErrorKind::InvalidScheme));
        }
    }

    // ran off the end without finding the delimiter
    Err(ParseError::new(bytes.len(), ParseErrorKind::Truncated))
}

/// Returns true if `s` is a well-formed scheme (without the trailing `:`).
#[must_use]
pub fn is_valid_scheme(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(&b) if chars::is_alpha(b) => {
            bytes[1..].iter().all(|&b| chars::is_scheme_char(b))
        }
        _ => false,
    }
}
