//! Recursive descent recognizer for the mangling grammar
//!
//! Every production dispatches on its leading token and then commits
//! to that alternative: once a token is consumed the parser never
//! rewinds to try another branch. Failures propagate with `?` all the
//! way out of [`parse`], so a bad input rejects as a whole instead of
//! producing a partial tree.
//!
//! ## Modules
//!
//! - `names` - name productions, from source names to nested names
//! - `types` - type productions, including literal expressions
//! - `special` - the RTTI special names

mod names;
mod special;
mod types;

use crate::itanium::ast::{CvQualifiers, Node};
use crate::itanium::cursor::Cursor;
use crate::itanium::error::{DemangleError, Result};

/// Deepest component nesting accepted before giving up
const MAX_DEPTH: usize = 96;

/// Demangles a raw symbol into its AST.
///
/// Total over arbitrary input: every string maps to either a tree or a
/// [`DemangleError`], and the same input always maps to the same
/// result.
pub fn parse(raw: &str) -> Result<Node> {
    let mut cursor = Cursor::new(raw);
    parse_mangled_name(&mut cursor, 0)
}

/// Parses the `_Z` marker followed by either a special name or a name
/// with its argument types.
fn parse_mangled_name(cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
    ensure_depth(depth)?;
    if !cursor.accept("_Z") {
        return Err(DemangleError::MalformedPrefix);
    }

    if let Some(special) = special::parse_special(cursor, depth)? {
        return Ok(special);
    }

    let name = names::parse_name(cursor, depth + 1)?;
    let mut args = Vec::new();
    while !cursor.at_end() {
        args.push(types::parse_type(cursor, depth + 1)?);
    }

    if args.is_empty() {
        Ok(name)
    } else {
        Ok(Node::Function {
            name: Box::new(name),
            args,
        })
    }
}

/// Fails once component nesting exceeds the supported depth.
fn ensure_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        Err(DemangleError::RecursionLimit)
    } else {
        Ok(())
    }
}

/// Parses elements with `element` until a closing `E` is consumed.
///
/// Input that runs out before the `E` fails as truncated.
fn parse_until_end(
    cursor: &mut Cursor<'_>,
    depth: usize,
    element: fn(&mut Cursor<'_>, usize) -> Result<Node>,
) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    while !cursor.accept("E") {
        if cursor.at_end() {
            return Err(DemangleError::Truncated);
        }
        nodes.push(element(cursor, depth + 1)?);
    }
    Ok(nodes)
}

/// Wraps `node` in a qualifier node, unless the set is empty.
fn apply_qualifiers(quals: CvQualifiers, node: Node) -> Node {
    if quals.is_empty() {
        node
    } else {
        Node::CvQual {
            quals,
            inner: Box::new(node),
        }
    }
}

/// Wraps `node` for a `P`, `R` or `O` indirection marker.
fn apply_indirection(marker: char, node: Node) -> Node {
    match marker {
        'P' => Node::Pointer(Box::new(node)),
        'R' => Node::Lvalue(Box::new(node)),
        'O' => Node::Rvalue(Box::new(node)),
        _ => node,
    }
}
