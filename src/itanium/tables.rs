//! Static vocabulary tables for the mangling grammar
//!
//! Operator codes, builtin type codes, abbreviated std names and the
//! constructor and destructor tags are fixed two-character vocabulary.
//! Each table is a const slice so the full inventory is visible in one
//! place, with a lazily built map in front of the larger ones.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::itanium::ast::{CtorKind, DtorKind};

/// Operator codes with their symbolic spellings, keyword not included
pub const OPERATORS: &[(&str, &str)] = &[
    ("nw", "new"),
    ("na", "new[]"),
    ("dl", "delete"),
    ("da", "delete[]"),
    ("ps", "+"), // unary
    ("ng", "-"), // unary
    ("ad", "&"), // unary
    ("de", "*"), // unary
    ("co", "~"),
    ("pl", "+"),
    ("mi", "-"),
    ("ml", "*"),
    ("dv", "/"),
    ("rm", "%"),
    ("an", "&"),
    ("or", "|"),
    ("eo", "^"),
    ("aS", "="),
    ("pL", "+="),
    ("mI", "-="),
    ("mL", "*="),
    ("dV", "/="),
    ("rM", "%="),
    ("aN", "&="),
    ("oR", "|="),
    ("eO", "^="),
    ("ls", "<<"),
    ("rs", ">>"),
    ("lS", "<<="),
    ("rS", ">>="),
    ("eq", "=="),
    ("ne", "!="),
    ("lt", "<"),
    ("gt", ">"),
    ("le", "<="),
    ("ge", ">="),
    ("nt", "!"),
    ("aa", "&&"),
    ("oo", "||"),
    ("pp", "++"), // postfix in expression context
    ("mm", "--"), // postfix in expression context
    ("cm", ","),
    ("pm", "->*"),
    ("pt", "->"),
    ("cl", "()"),
    ("ix", "[]"),
    ("qu", "?"),
];

/// Builtin type codes with their canonical spellings
///
/// Single letters cover the classic integer and floating kinds. The
/// `D`-prefixed codes are the two-character extensions.
pub const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("v", "void"),
    ("w", "wchar_t"),
    ("b", "bool"),
    ("c", "char"),
    ("a", "signed char"),
    ("h", "unsigned char"),
    ("s", "short"),
    ("t", "unsigned short"),
    ("i", "int"),
    ("j", "unsigned int"),
    ("l", "long"),
    ("m", "unsigned long"),
    ("x", "long long"),
    ("y", "unsigned long long"),
    ("n", "__int128"),
    ("o", "unsigned __int128"),
    ("f", "float"),
    ("d", "double"),
    ("e", "__float80"),
    ("g", "__float128"),
    ("z", "..."),
    ("Dd", "decimal64"),
    ("De", "decimal128"),
    ("Df", "decimal32"),
    ("Dh", "half"),
    ("Di", "char32_t"),
    ("Ds", "char16_t"),
    ("Du", "char8_t"),
    ("Da", "auto"),
    ("Dc", "decltype(auto)"),
    ("Dn", "decltype(nullptr)"),
];

/// Abbreviated std names, expanded to their qualified path segments
///
/// The bare `St` prefix is not listed here. It qualifies whatever name
/// follows it and is handled as its own grammar alternative.
pub const STD_NAMES: &[(&str, &[&str])] = &[
    ("Sa", &["std", "allocator"]),
    ("Sb", &["std", "basic_string"]),
    ("Ss", &["std", "string"]),
    ("Si", &["std", "istream"]),
    ("So", &["std", "ostream"]),
    ("Sd", &["std", "iostream"]),
];

/// Constructor tags
pub const CTOR_TAGS: &[(&str, CtorKind)] = &[
    ("C1", CtorKind::Complete),
    ("C2", CtorKind::Base),
    ("C3", CtorKind::Allocating),
];

/// Destructor tags
pub const DTOR_TAGS: &[(&str, DtorKind)] = &[
    ("D0", DtorKind::Deleting),
    ("D1", DtorKind::Complete),
    ("D2", DtorKind::Base),
];

static OPERATOR_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| OPERATORS.iter().copied().collect());

static BUILTIN_TYPE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BUILTIN_TYPES.iter().copied().collect());

static STD_NAME_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| STD_NAMES.iter().copied().collect());

/// Looks up the symbolic spelling for a two-character operator code.
pub fn operator_spelling(code: &str) -> Option<&'static str> {
    OPERATOR_MAP.get(code).copied()
}

/// Looks up the canonical spelling for a builtin type code.
pub fn builtin_spelling(code: &str) -> Option<&'static str> {
    BUILTIN_TYPE_MAP.get(code).copied()
}

/// Looks up the path segments for an abbreviated std name.
pub fn std_name_parts(code: &str) -> Option<&'static [&'static str]> {
    STD_NAME_MAP.get(code).copied()
}

/// Looks up the constructor kind for a `C1`, `C2` or `C3` tag.
pub fn ctor_kind(tag: &str) -> Option<CtorKind> {
    CTOR_TAGS
        .iter()
        .find(|(code, _)| *code == tag)
        .map(|&(_, kind)| kind)
}

/// Looks up the destructor kind for a `D0`, `D1` or `D2` tag.
pub fn dtor_kind(tag: &str) -> Option<DtorKind> {
    DTOR_TAGS
        .iter()
        .find(|(code, _)| *code == tag)
        .map(|&(_, kind)| kind)
}
