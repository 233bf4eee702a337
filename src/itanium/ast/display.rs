//! Canonical rendering of demangled names
//!
//! Rendering is deterministic: a given tree always prints the same
//! text. Separators in qualified names are suppressed before template
//! argument lists, a single `void` argument collapses to an empty
//! argument list, and cv qualifiers print in a fixed order.

use std::fmt;

use crate::itanium::ast::node::{CtorKind, DtorKind, Node};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Name(text) => f.write_str(text),
            Node::QualName(elems) => {
                // The separator is keyed on text already written, not
                // on element position, so an empty leading name does
                // not produce a dangling `::`
                let mut result = String::new();
                for elem in elems {
                    if !result.is_empty() && !matches!(elem, Node::TplArgs(_)) {
                        result.push_str("::");
                    }
                    result.push_str(&elem.to_string());
                }
                f.write_str(&result)
            }
            Node::TplArgs(args) => {
                f.write_str("<")?;
                write_joined(f, args)?;
                f.write_str(">")
            }
            Node::Ctor(kind) => f.write_str(match kind {
                CtorKind::Complete => "{ctor}",
                CtorKind::Base => "{base ctor}",
                CtorKind::Allocating => "{allocating ctor}",
            }),
            Node::Dtor(kind) => f.write_str(match kind {
                DtorKind::Deleting => "{deleting dtor}",
                DtorKind::Complete => "{dtor}",
                DtorKind::Base => "{base dtor}",
            }),
            Node::Operator(spelling) => {
                if spelling.starts_with("new") || spelling.starts_with("delete") {
                    write!(f, "operator {}", spelling)
                } else {
                    write!(f, "operator{}", spelling)
                }
            }
            Node::Pointer(inner) => write!(f, "{}*", inner),
            Node::Lvalue(inner) => write!(f, "{}&", inner),
            Node::Rvalue(inner) => write!(f, "{}&&", inner),
            Node::CvQual { quals, inner } => {
                write!(f, "{}", inner)?;
                for word in quals.words() {
                    write!(f, " {}", word)?;
                }
                Ok(())
            }
            Node::Literal { ty, value } => write!(f, "({}){}", ty, value),
            Node::TplParam(index) => write!(f, "{{T{}}}", index),
            Node::Function { name, args } => {
                write!(f, "{}", name)?;
                if let [Node::Name(only)] = args.as_slice() {
                    if only == "void" {
                        return f.write_str("()");
                    }
                }
                f.write_str("(")?;
                write_joined(f, args)?;
                f.write_str(")")
            }
            Node::Vtable(inner) => write!(f, "vtable for {}", inner),
            Node::Vtt(inner) => write!(f, "vtt for {}", inner),
            Node::Typeinfo(inner) => write!(f, "typeinfo for {}", inner),
            Node::TypeinfoName(inner) => write!(f, "typeinfo name for {}", inner),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (idx, node) in nodes.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}
