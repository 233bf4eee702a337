//! AST definitions for demangled names
//!
//! ## Modules
//!
//! - `node` - node type definitions and tree accessors
//! - `display` - canonical `Display` rendering

pub mod node;

mod display;

// Re-export commonly used types at module root
pub use node::{CtorKind, CvQualifiers, DtorKind, Node};
