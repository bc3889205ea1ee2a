//! Kani proof harnesses for parser robustness.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::parse;

/// Bound on input length; keeps the proofs tractable.
const MAX_LEN: usize = 12;

fn arbitrary_ascii_input() -> Vec<u8> {
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);
    let mut bytes = Vec::with_capacity(len);
    for _ in 0..len {
        let b: u8 = kani::any();
        kani::assume(b.is_ascii());
        bytes.push(b);
    }
    bytes
}

#[kani::proof]
fn parse_never_panics() {
    let bytes = arbitrary_ascii_input();
    if let Ok(input) = std::str::from_utf8(&bytes) {
        let _ = parse(input);
    }
}

#[kani::proof]
fn accepted_parses_satisfy_coverage() {
    let bytes = arbitrary_ascii_input();
    let Ok(input) = std::str::from_utf8(&bytes) else {
        return;
    };
    let Ok(parts) = parse(input) else {
        return;
    };

    // scheme starts the input, and every present span lies within it
    assert_eq!(parts.scheme_span().start(), 0);
    assert!(parts.scheme_span().end() <= input.len());
    assert!(parts.path_span().end() <= input.len());
    if let Some(host) = parts.host_span() {
        assert!(parts.scheme_span().end() < host.start());
        assert!(host.end() <= input.len());
    }
    if let Some(port) = parts.port_span() {
        assert!(parts.host_span().is_some());
        assert!(port.end() <= input.len());
    }
    if parts.user_info_span().is_some() {
        assert!(parts.host_span().is_some());
    }
    if let Some(fragment) = parts.fragment_span() {
        assert_eq!(fragment.end(), input.len());
    }
}
