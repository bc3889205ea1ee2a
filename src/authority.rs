//! Authority decomposition: user-info, host, and port.
//!
//! The hard case lives here: a `:` inside an authority is provisional until
//! a segment-terminating delimiter is reached, because a later `@` re-scopes
//! everything before it as user-info. [`split_host_port`] is the commit
//! point that resolves the last recorded colon into a host/port split.

use crate::chars;
use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;

/// Width of the user-info character starting at `i`, or `None`.
///
/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
const fn user_info_width(bytes: &[u8], i: usize) -> Option<usize> {
    let b = bytes[i];
    if chars::is_unreserved(b) || chars::is_sub_delim(b) || b == b':' {
        Some(1)
    } else if chars::is_pct_encoded(bytes, i) {
        Some(3)
    } else {
        None
    }
}

/// Validates the span `[start, end)` as user-info.
///
/// Rejecting here aborts the whole parse; no partial authority is ever
/// accepted.
pub(crate) fn validate_user_info(bytes: &[u8], start: usize, end: usize) -> Result<(), ParseError> {
    let mut i = start;
    while i < end {
        match user_info_width(&bytes[..end], i) {
            Some(w) => i += w,
            None => return Err(ParseError::new(i, ParseErrorKind::InvalidUserInfo)),
        }
    }
    Ok(())
}

/// Commits the authority segment `[first, end)` as host plus optional port.
///
/// `last_colon` is the tentative port separator recorded during the scan; if
/// present, the host is everything before it and the port everything after,
/// validated digits-only (empty means the scheme's default port). Without a
/// colon the whole segment is the host, which may be empty.
pub(crate) fn split_host_port(
    bytes: &[u8],
    first: usize,
    end: usize,
    last_colon: Option<usize>,
) -> Result<(Span, Option<Span>), ParseError> {
    match last_colon {
        Some(colon) => {
            validate_port_digits(bytes, colon + 1, end)?;
            Ok((Span::new(first, colon), Some(Span::new(colon + 1, end))))
        }
        None => Ok((Span::new(first, end), None)),
    }
}

/// Checks that `[start, end)` is digits only.
pub(crate) fn validate_port_digits(bytes: &[u8], start: usize, end: usize) -> Result<(), ParseError> {
    for (i, &b) in bytes[start..end].iter().enumerate() {
        if !chars::is_digit(b) {
            return Err(ParseError::new(start + i, ParseErrorKind::InvalidPort));
        }
    }
    Ok(())
}

/// Returns true if `s` is valid user-info content.
#[must_use]
pub fn is_valid_user_info(s: &str) -> bool {
    validate_user_info(s.as_bytes(), 0, s.len()).is_ok()
}

/// Returns true if `s` is a valid port: digits only, empty allowed.
#[must_use]
pub fn is_valid_port(s: &str) -> bool {
    s.bytes().all(|b| chars::is_digit(b))
}

/// Returns true if `s` can stand as a host in a recomposed URI.
///
/// Either a bracketed literal (`[` … `]` with nothing after the bracket) or
/// a string free of the authority delimiters `@ : / ? # [ ]`. This is a
/// recomposition-safety check, not an address-format check: the engine does
/// not classify host octets, and neither does this.
#[must_use]
pub fn is_valid_host(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.first() == Some(&b'[') {
        match bytes.iter().position(|&b| b == b']') {
            Some(close) => close == bytes.len() - 1,
            None => false,
        }
    } else {
        bytes
            .iter()
            .all(|&b| !matches!(b, b'@' | b':' | b'/' | b'?' | b'#' | b'[' | b']'))
    }
}
