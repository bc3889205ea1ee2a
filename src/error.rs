//! Error types for URI parsing and construction.

use std::fmt;

/// Error returned when an input is not a valid URI reference.
///
/// Carries the byte offset at which the grammar violation was detected.
/// A failed parse is final: the engine never returns partial output, and
/// parsing the same input again yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset of the offending position in the input.
    pub offset: usize,
    /// The specific grammar violation.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(offset: usize, kind: ParseErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Specific grammar violations, one per URI production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scheme is missing, does not start with a letter, or contains a
    /// character outside alnum / `+` / `-` / `.`.
    InvalidScheme,
    /// A character before `@` is not valid in user-info.
    InvalidUserInfo,
    /// The authority's host portion is structurally malformed.
    InvalidHost,
    /// A port contains a non-digit character.
    InvalidPort,
    /// A bracketed IPv6 literal is unclosed.
    InvalidIPv6Literal,
    /// A path character is outside `pchar` / `/`.
    InvalidPath,
    /// A query character is outside `pchar` / `?` / `/`.
    InvalidQuery,
    /// A fragment character is outside `pchar` / `?` / `/`.
    InvalidFragment,
    /// The input ended before the grammar could complete.
    Truncated,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme => write!(f, "invalid scheme"),
            Self::InvalidUserInfo => write!(f, "invalid user-info"),
            Self::InvalidHost => write!(f, "invalid host"),
            Self::InvalidPort => write!(f, "invalid port"),
            Self::InvalidIPv6Literal => write!(f, "invalid IPv6 literal"),
            Self::InvalidPath => write!(f, "invalid path"),
            Self::InvalidQuery => write!(f, "invalid query"),
            Self::InvalidFragment => write!(f, "invalid fragment"),
            Self::Truncated => write!(f, "input truncated"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

impl std::error::Error for ParseError {}

/// Errors from [`UriBuilder::build`](crate::UriBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// No scheme was set; every URI produced by the builder is absolute.
    MissingScheme,
    /// User-info was set without a host.
    UserInfoWithoutHost,
    /// A port was set without a host.
    PortWithoutHost,
    /// The recomposed string failed the commit re-parse.
    Invalid(ParseError),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme => write!(f, "a scheme is required"),
            Self::UserInfoWithoutHost => {
                write!(f, "user-info requires a host to be set")
            }
            Self::PortWithoutHost => write!(f, "a port requires a host to be set"),
            Self::Invalid(e) => write!(f, "recomposed URI is not valid: {e}"),
        }
    }
}

impl std::error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}
