//! Owned, immutable URI value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser;
use crate::parts::UriParts;
use crate::span::Span;

/// A parsed URI that owns its text.
///
/// `Uri` is the consumer of the engine's successful output: it stores the
/// input string together with the committed component spans, and offers
/// read-only accessors plus equality and ordering by textual identity.
/// The text is never normalized or percent-decoded.
///
/// # Examples
///
/// ```
/// use uri_parts::Uri;
///
/// let uri = Uri::parse("http://example.com:8080/path?q=1#frag").unwrap();
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.host(), Some("example.com"));
/// assert_eq!(uri.port_number(), Some(8080));
/// assert_eq!(uri.path(), "/path");
/// assert_eq!(uri.as_str(), "http://example.com:8080/path?q=1#frag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    text: String,
    scheme: Span,
    user_info: Option<Span>,
    host: Option<Span>,
    port: Option<Span>,
    path: Span,
    query: Option<Span>,
    fragment: Option<Span>,
}

impl Uri {
    /// Parses an owned URI from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `input` is not a valid URI reference.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input).map(|parts| Self::from_parts(&parts))
    }

    /// Builds an owned URI from a completed parse record.
    #[must_use]
    pub fn from_parts(parts: &UriParts<'_>) -> Self {
        Self {
            text: parts.source().to_string(),
            scheme: parts.scheme_span(),
            user_info: parts.user_info_span(),
            host: parts.host_span(),
            port: parts.port_span(),
            path: parts.path_span(),
            query: parts.query_span(),
            fragment: parts.fragment_span(),
        }
    }

    /// The scheme, without its `:` delimiter.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.scheme.slice(&self.text)
    }

    /// The user-info, if present.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.map(|s| s.slice(&self.text))
    }

    /// The host, if an authority was present. Bracketed IPv6 literals keep
    /// their brackets.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.map(|s| s.slice(&self.text))
    }

    /// The port digits, if present. May be empty.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.map(|s| s.slice(&self.text))
    }

    /// The port as a number, if present, non-empty, and within `u16` range.
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        self.port().and_then(|p| p.parse().ok())
    }

    /// The path. May be empty.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path.slice(&self.text)
    }

    /// The query, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.map(|s| s.slice(&self.text))
    }

    /// The fragment, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.map(|s| s.slice(&self.text))
    }

    /// The full authority (`user-info@host:port`), if present.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        let host = self.host?;
        let start = self.user_info.map_or(host.start(), |s| s.start());
        let end = self.port.map_or(host.end(), |s| s.end());
        Some(Span::new(start, end).slice(&self.text))
    }

    /// Returns true if the URI carries a `//` authority.
    #[must_use]
    pub const fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// The URI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the value and returns the URI text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Re-borrows the component spans against the owned text.
    #[must_use]
    pub fn as_parts(&self) -> UriParts<'_> {
        UriParts {
            source: &self.text,
            scheme: self.scheme,
            user_info: self.user_info,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl std::hash::Hash for Uri {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // spans are a deterministic function of the text
        self.text.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
