//! Type productions
//!
//! A type dispatches on its leading character: qualifier letters wrap
//! the type they precede, `P`, `R` and `O` wrap for indirection, `T`
//! references a template parameter, `L` introduces a literal
//! expression, and one or two character codes name the builtin types.
//! Anything else falls back to a name used as a type.

use crate::itanium::ast::{CvQualifiers, Node};
use crate::itanium::cursor::Cursor;
use crate::itanium::error::{DemangleError, Result};
use crate::itanium::tables;

use super::{apply_indirection, apply_qualifiers, ensure_depth, parse_mangled_name};

/// Parses one type production.
pub(super) fn parse_type(cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
    ensure_depth(depth)?;
    let leading = cursor.peek().ok_or(DemangleError::Truncated)?;

    if matches!(leading, 'r' | 'V' | 'K') {
        let letters = cursor.eat_while(|ch| matches!(ch, 'r' | 'V' | 'K'));
        let inner = parse_type(cursor, depth + 1)?;
        return Ok(apply_qualifiers(CvQualifiers::from_letters(letters), inner));
    }

    if matches!(leading, 'P' | 'R' | 'O') {
        cursor.advance(1);
        let inner = parse_type(cursor, depth + 1)?;
        return Ok(apply_indirection(leading, inner));
    }

    if leading == 'T' {
        cursor.advance(1);
        return parse_template_param(cursor);
    }

    if leading == 'L' {
        cursor.advance(1);
        return parse_expr_primary(cursor, depth);
    }

    if leading == 'D' {
        // Two character builtin codes; the destructor tags D0, D1 and
        // D2 fall through to the name production below
        if let Some(spelling) = cursor.lookahead(2).and_then(tables::builtin_spelling) {
            cursor.advance(2);
            return Ok(Node::name(spelling));
        }
    } else if let Some(spelling) = cursor.lookahead(1).and_then(tables::builtin_spelling) {
        cursor.advance(1);
        return Ok(Node::name(spelling));
    }

    super::names::parse_name(cursor, depth)
}

/// Parses a template parameter reference, the `T` already consumed.
///
/// The sequence id is base 36 and shifted by one: a bare `T_` is
/// parameter zero and `T<seq>_` is `1 + seq`.
fn parse_template_param(cursor: &mut Cursor<'_>) -> Result<Node> {
    let seq_id = cursor.advance_until('_').ok_or(DemangleError::Truncated)?;
    if seq_id.is_empty() {
        return Ok(Node::TplParam(0));
    }

    let mut index: usize = 0;
    for ch in seq_id.chars() {
        let digit = ch.to_digit(36).ok_or(DemangleError::UnrecognizedToken)? as usize;
        index = index
            .checked_mul(36)
            .and_then(|value| value.checked_add(digit))
            .ok_or(DemangleError::Truncated)?;
    }
    let index = index.checked_add(1).ok_or(DemangleError::Truncated)?;
    Ok(Node::TplParam(index))
}

/// Parses a literal expression, the `L` already consumed.
///
/// A literal is either a complete mangled name, demangled on a fresh
/// cursor over the text before the closing `E`, or a type followed by
/// the literal value spelled out up to the closing `E`.
fn parse_expr_primary(cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
    if cursor.rest().starts_with("_Z") {
        let mangled = cursor.advance_until('E').ok_or(DemangleError::Truncated)?;
        let mut inner = Cursor::new(mangled);
        return parse_mangled_name(&mut inner, depth + 1);
    }

    let ty = parse_type(cursor, depth + 1)?;
    let value = cursor.advance_until('E').ok_or(DemangleError::Truncated)?;
    Ok(Node::Literal {
        ty: Box::new(ty),
        value: value.to_string(),
    })
}
