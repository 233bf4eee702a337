//! RTTI special names
//!
//! `TV`, `TT`, `TI` and `TS` introduce the vtable, vtt, typeinfo and
//! typeinfo name data structures owned by a type.

use crate::itanium::ast::Node;
use crate::itanium::cursor::Cursor;
use crate::itanium::error::Result;

use super::types;

/// Parses a special name when one introduces the input.
///
/// Returns `Ok(None)` without consuming anything when the input does
/// not start with a special tag, so the caller can parse an ordinary
/// name instead. Once a tag is consumed the parse is committed: a
/// failure in the described type fails the whole input.
pub(super) fn parse_special(cursor: &mut Cursor<'_>, depth: usize) -> Result<Option<Node>> {
    let tag = match cursor.lookahead(2) {
        Some(tag @ ("TV" | "TT" | "TI" | "TS")) => tag,
        _ => return Ok(None),
    };
    cursor.accept(tag);

    let ty = types::parse_type(cursor, depth + 1)?;
    let node = match tag {
        "TV" => Node::Vtable(Box::new(ty)),
        "TT" => Node::Vtt(Box::new(ty)),
        "TI" => Node::Typeinfo(Box::new(ty)),
        _ => Node::TypeinfoName(Box::new(ty)),
    };
    Ok(Some(node))
}
