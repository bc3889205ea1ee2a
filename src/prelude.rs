//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_parts::prelude::*;
//!
//! let parts = parse("http://example.com/").unwrap();
//! assert_eq!(parts.host(), Some("example.com"));
//! ```

pub use crate::{
    // Core operation and records
    parse, Span, UriParts,
    // Owned value and builder
    Uri, UriBuilder,
    // Errors
    BuilderError, ParseError, ParseErrorKind,
};
