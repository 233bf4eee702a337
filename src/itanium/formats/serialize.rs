//! Serialized dumps of demangled name trees
//!
//! Kind tags in the serialized form match the lowercase labels from
//! [`Node::kind_name`].

use serde::ser::Error as _;

use crate::itanium::ast::Node;

/// Renders the tree as pretty printed JSON.
pub fn to_json_str(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Renders the tree as YAML.
///
/// The tree goes through the JSON document model first, so node kinds
/// come out as plain mapping keys rather than YAML tags.
pub fn to_yaml_str(node: &Node) -> Result<String, serde_yaml::Error> {
    let tree = serde_json::to_value(node).map_err(serde_yaml::Error::custom)?;
    serde_yaml::to_string(&tree)
}
