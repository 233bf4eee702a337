//! Failure values produced by the demangler
//!
//! Demangling is total: every input maps to either an AST or one of the
//! variants below. Nothing here carries a position because a failed
//! parse rejects the whole input rather than a span of it.

use std::fmt;

/// Why an input was rejected by the demangler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemangleError {
    /// The input does not begin with the `_Z` mangling marker
    MalformedPrefix,
    /// The input ended before the current component was complete
    Truncated,
    /// No grammar alternative matches at the current position
    UnrecognizedToken,
    /// Component nesting exceeded the recursion limit
    RecursionLimit,
}

impl fmt::Display for DemangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemangleError::MalformedPrefix => {
                write!(f, "Input does not begin with the _Z mangling marker")
            }
            DemangleError::Truncated => {
                write!(f, "Input ended before the current component was complete")
            }
            DemangleError::UnrecognizedToken => {
                write!(f, "No grammar alternative matches at the current position")
            }
            DemangleError::RecursionLimit => {
                write!(f, "Component nesting is deeper than the demangler supports")
            }
        }
    }
}

impl std::error::Error for DemangleError {}

/// Result alias used throughout the demangler
pub type Result<T> = std::result::Result<T, DemangleError>;
