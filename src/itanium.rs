//! Demangler for the Itanium C++ ABI mangling scheme
//!
//! ## Modules
//!
//! - `cursor` - forward-only read head over the raw text
//! - `tables` - static vocabulary tables
//! - `ast` - tree definitions and canonical rendering
//! - `parser` - the grammar recognizer
//! - `formats` - tree dumps in text, JSON and YAML
//! - `processor` - format selection API for the command line tool
//! - `error` - failure values
//! - `testing` - assertion helpers for demangler tests

pub mod ast;
pub mod cursor;
pub mod error;
pub mod formats;
pub mod parser;
pub mod processor;
pub mod tables;
pub mod testing;

// Re-export commonly used types at module root
pub use ast::{CtorKind, CvQualifiers, DtorKind, Node};
pub use error::DemangleError;
pub use parser::parse;
