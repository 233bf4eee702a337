//! Name productions
//!
//! A name dispatches on its first character: a digit starts a source
//! name, `C` and `D` start constructor and destructor tags, `S` an
//! abbreviated std name or the `St` prefix, `N` a nested name, `I` a
//! bare template argument list, and a lowercase pair an operator code.
//! Whatever the alternative, a template argument list that follows
//! immediately folds with the name into one qualified name.

use crate::itanium::ast::{CvQualifiers, Node};
use crate::itanium::cursor::Cursor;
use crate::itanium::error::{DemangleError, Result};
use crate::itanium::tables;

use super::{apply_indirection, apply_qualifiers, ensure_depth, parse_until_end};

/// Parses one name production, folding trailing template arguments.
pub(super) fn parse_name(cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
    ensure_depth(depth)?;
    let leading = cursor.peek().ok_or(DemangleError::Truncated)?;

    let node = if leading.is_ascii_digit() {
        parse_source_name(cursor)?
    } else if leading == 'C' {
        parse_ctor(cursor)?
    } else if leading == 'D' {
        parse_dtor(cursor)?
    } else if leading == 'S' {
        parse_std_name(cursor, depth)?
    } else if cursor.accept("N") {
        parse_nested_name(cursor, depth)?
    } else if cursor.accept("I") {
        Node::TplArgs(parse_until_end(cursor, depth, super::types::parse_type)?)
    } else {
        parse_operator_name(cursor)?
    };

    if cursor.accept("I") {
        let args = parse_until_end(cursor, depth, super::types::parse_type)?;
        return Ok(Node::QualName(vec![node, Node::TplArgs(args)]));
    }
    Ok(node)
}

/// Parses a decimal length prefix and that many characters of name
/// text.
fn parse_source_name(cursor: &mut Cursor<'_>) -> Result<Node> {
    let digits = cursor.eat_while(|ch| ch.is_ascii_digit());
    let length: usize = digits.parse().map_err(|_| DemangleError::Truncated)?;
    let text = cursor.advance(length).ok_or(DemangleError::Truncated)?;
    Ok(Node::Name(text.to_string()))
}

fn parse_ctor(cursor: &mut Cursor<'_>) -> Result<Node> {
    let tag = cursor.lookahead(2).ok_or(DemangleError::Truncated)?;
    let kind = tables::ctor_kind(tag).ok_or(DemangleError::UnrecognizedToken)?;
    cursor.accept(tag);
    Ok(Node::Ctor(kind))
}

fn parse_dtor(cursor: &mut Cursor<'_>) -> Result<Node> {
    let tag = cursor.lookahead(2).ok_or(DemangleError::Truncated)?;
    let kind = tables::dtor_kind(tag).ok_or(DemangleError::UnrecognizedToken)?;
    cursor.accept(tag);
    Ok(Node::Dtor(kind))
}

fn parse_operator_name(cursor: &mut Cursor<'_>) -> Result<Node> {
    let code = cursor
        .lookahead(2)
        .ok_or(DemangleError::UnrecognizedToken)?;
    let spelling =
        tables::operator_spelling(code).ok_or(DemangleError::UnrecognizedToken)?;
    cursor.accept(code);
    Ok(Node::Operator(spelling.to_string()))
}

/// Parses either the `St` prefix or one of the abbreviated std names.
///
/// An abbreviation expands to its full qualified name. The `St` prefix
/// instead qualifies whatever name follows it, splicing `std` onto the
/// front of an already qualified name rather than nesting it.
fn parse_std_name(cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
    if cursor.accept("St") {
        if cursor.at_end() {
            // A bare prefix qualifies nothing
            return Err(DemangleError::MalformedPrefix);
        }
        let inner = parse_name(cursor, depth + 1)?;
        return Ok(match inner {
            Node::QualName(mut elems) => {
                elems.insert(0, Node::name("std"));
                Node::QualName(elems)
            }
            other => Node::QualName(vec![Node::name("std"), other]),
        });
    }

    let code = cursor.lookahead(2).ok_or(DemangleError::Truncated)?;
    let parts = tables::std_name_parts(code).ok_or(DemangleError::UnrecognizedToken)?;
    cursor.accept(code);
    Ok(Node::QualName(
        parts.iter().map(|part| Node::name(*part)).collect(),
    ))
}

/// Parses the body of a nested name, the `N` already consumed.
///
/// Qualifier letters come first, then an optional reference qualifier,
/// then name segments up to the closing `E`. The cv wrapper is applied
/// before the reference wrapper, so a reference qualifier always ends
/// up outermost.
fn parse_nested_name(cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
    let letters = cursor.eat_while(|ch| matches!(ch, 'r' | 'V' | 'K'));
    let quals = CvQualifiers::from_letters(letters);
    let ref_qual = if cursor.accept("R") {
        Some('R')
    } else if cursor.accept("O") {
        Some('O')
    } else {
        None
    };

    let elems = parse_until_end(cursor, depth, parse_name)?;
    if elems.is_empty() {
        return Err(DemangleError::UnrecognizedToken);
    }

    let mut node = apply_qualifiers(quals, Node::QualName(elems));
    if let Some(marker) = ref_qual {
        node = apply_indirection(marker, node);
    }
    Ok(node)
}
