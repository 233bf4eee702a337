//! Output renderings for demangled name trees
//!
//! ## Modules
//!
//! - `treeviz` - indented tree dump with box drawing connectors
//! - `serialize` - JSON and YAML dumps of the tree

pub mod serialize;
pub mod treeviz;

pub use serialize::{to_json_str, to_yaml_str};
pub use treeviz::to_treeviz_str;
