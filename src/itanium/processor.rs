//! Symbol processing API
//!
//! This module provides the entry point used by the command line tool:
//! pick an output format, hand in a mangled symbol, get rendered text
//! back or a processing error.

use std::fmt;

use crate::itanium::error::DemangleError;
use crate::itanium::formats::{to_json_str, to_treeviz_str, to_yaml_str};
use crate::itanium::parser::parse;

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    /// Tree dump followed by the canonical rendering
    Summary,
    /// Canonical rendering only
    Demangled,
    /// Tree dump only
    AstTreeviz,
    /// JSON dump of the tree
    AstJson,
    /// YAML dump of the tree
    AstYaml,
}

impl OutputFormat {
    /// Parse a format string like "demangled" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "summary" => Ok(OutputFormat::Summary),
            "demangled" => Ok(OutputFormat::Demangled),
            "ast-tree" => Ok(OutputFormat::AstTreeviz),
            "ast-json" => Ok(OutputFormat::AstJson),
            "ast-yaml" => Ok(OutputFormat::AstYaml),
            _ => Err(ProcessingError::InvalidFormat(format_str.to_string())),
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ["summary", "demangled", "ast-tree", "ast-json", "ast-yaml"]
        .iter()
        .map(|format| format.to_string())
        .collect()
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    Demangle(DemangleError),
    Serialize(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::Demangle(err) => write!(f, "Demangling failed: {}", err),
            ProcessingError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Demangle a symbol and render it in the given format
pub fn process_symbol(mangled: &str, format: &OutputFormat) -> Result<String, ProcessingError> {
    let node = parse(mangled).map_err(ProcessingError::Demangle)?;

    match format {
        OutputFormat::Summary => Ok(format!("{}\n{}", to_treeviz_str(&node), node)),
        OutputFormat::Demangled => Ok(node.to_string()),
        OutputFormat::AstTreeviz => Ok(to_treeviz_str(&node)),
        OutputFormat::AstJson => {
            to_json_str(&node).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
        OutputFormat::AstYaml => {
            to_yaml_str(&node).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
    }
}
