//! Testing utilities for demangler assertions
//!
//! # Demangler Testing Guidelines
//!
//! Demangler tests compare whole inputs against whole outcomes: a
//! mangled symbol either demangles to one exact rendering or fails
//! with one exact error. The helpers here keep those comparisons in
//! one place so a failing test always reports the offending symbol.
//!
//! ```rust,ignore
//! use cxxfilt::itanium::testing::{assert_demangles, assert_fails_with};
//! use cxxfilt::itanium::DemangleError;
//!
//! assert_demangles("_ZN3fooC1E", "foo::{ctor}");
//! assert_fails_with("_Z3x", DemangleError::Truncated);
//! ```
//!
//! For assertions about the tree itself, use [`parse_ok`] and compare
//! against a literal [`Node`] value rather than probing single fields.

use crate::itanium::ast::Node;
use crate::itanium::error::DemangleError;
use crate::itanium::parser::parse;

/// Asserts that `mangled` demangles to the exact canonical rendering.
///
/// # Panics
///
/// Panics when the parse fails or the rendering differs.
pub fn assert_demangles(mangled: &str, expected: &str) {
    match parse(mangled) {
        Ok(node) => {
            let rendered = node.to_string();
            assert_eq!(
                rendered, expected,
                "wrong rendering for {:?}: got {:?}, want {:?}",
                mangled, rendered, expected
            );
        }
        Err(err) => panic!(
            "expected {:?} to demangle to {:?}, but it failed: {}",
            mangled, expected, err
        ),
    }
}

/// Asserts that `mangled` is rejected, whatever the error.
///
/// # Panics
///
/// Panics when the parse unexpectedly succeeds.
pub fn assert_demangle_fails(mangled: &str) {
    if let Ok(node) = parse(mangled) {
        panic!(
            "expected {:?} to fail, but it demangled to {:?}",
            mangled,
            node.to_string()
        );
    }
}

/// Asserts that `mangled` is rejected with exactly `expected`.
///
/// # Panics
///
/// Panics when the parse succeeds or fails with a different error.
pub fn assert_fails_with(mangled: &str, expected: DemangleError) {
    match parse(mangled) {
        Ok(node) => panic!(
            "expected {:?} to fail with {:?}, but it demangled to {:?}",
            mangled,
            expected,
            node.to_string()
        ),
        Err(err) => assert_eq!(err, expected, "wrong error for {:?}", mangled),
    }
}

/// Parses `mangled`, panicking with a readable message on failure.
///
/// # Panics
///
/// Panics when the parse fails.
pub fn parse_ok(mangled: &str) -> Node {
    match parse(mangled) {
        Ok(node) => node,
        Err(err) => panic!("expected {:?} to demangle, but it failed: {}", mangled, err),
    }
}
