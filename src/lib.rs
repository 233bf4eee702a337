//! # cxxfilt
//!
//! A demangler for Itanium C++ ABI symbol names.
//!
//! Mangled names like `_ZN3fooC1E` encode qualified names, template
//! arguments and argument types into flat link-time symbols. [`parse`]
//! recognizes that encoding and returns an immutable syntax tree whose
//! `Display` form is the canonical human-readable rendering:
//!
//! ```rust,ignore
//! let node = cxxfilt::parse("_ZN3fooC1E").unwrap();
//! assert_eq!(node.to_string(), "foo::{ctor}");
//! ```
//!
//! ## Testing
//!
//! For demangler test helpers, see the [testing module](itanium::testing).

pub mod itanium;

pub use itanium::{parse, DemangleError, Node};
