//! Node definitions for demangled names
//!
//! A demangled name is an immutable tree built from a closed set of
//! node kinds: plain and qualified names, template machinery, type
//! wrappers, literals and the RTTI special names. Construction happens
//! in the parser; rendering lives in the display module.

use serde::{Deserialize, Serialize};

/// Which constructor variant a `C` tag names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtorKind {
    Complete,
    Base,
    Allocating,
}

/// Which destructor variant a `D` tag names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtorKind {
    Deleting,
    Complete,
    Base,
}

/// Qualifier set attached to a `cv_qual` node
///
/// The set is unordered at the data level; rendering applies a fixed
/// canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CvQualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
}

impl CvQualifiers {
    /// Builds the set from a run of `r`, `V` and `K` qualifier letters.
    ///
    /// Repeated letters collapse into a single membership.
    pub fn from_letters(letters: &str) -> Self {
        CvQualifiers {
            is_const: letters.contains('K'),
            is_volatile: letters.contains('V'),
            is_restrict: letters.contains('r'),
        }
    }

    /// True when no qualifier is present.
    pub fn is_empty(&self) -> bool {
        !(self.is_const || self.is_volatile || self.is_restrict)
    }

    /// Qualifier keywords in canonical rendering order.
    pub fn words(&self) -> Vec<&'static str> {
        let mut words = Vec::new();
        if self.is_const {
            words.push("const");
        }
        if self.is_volatile {
            words.push("volatile");
        }
        if self.is_restrict {
            words.push("restrict");
        }
        words
    }
}

/// A node in a demangled name tree
///
/// Trees are immutable once built and cheap to compare. Variant names
/// match the lowercase kind labels used in serialized dumps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Unqualified name, text taken verbatim from the input
    Name(String),
    /// Qualified name path of names and template argument lists,
    /// possibly ending in a ctor, dtor or operator
    QualName(Vec<Node>),
    /// Template argument list
    TplArgs(Vec<Node>),
    /// Constructor of the enclosing qualified name
    Ctor(CtorKind),
    /// Destructor of the enclosing qualified name
    Dtor(DtorKind),
    /// Operator name, spelling without the `operator` keyword
    Operator(String),
    /// Pointer to the inner type
    Pointer(Box<Node>),
    /// Lvalue reference to the inner type
    Lvalue(Box<Node>),
    /// Rvalue reference to the inner type
    Rvalue(Box<Node>),
    /// Inner type with cv qualifiers applied
    CvQual {
        quals: CvQualifiers,
        inner: Box<Node>,
    },
    /// Literal value together with its type
    Literal { ty: Box<Node>, value: String },
    /// Template parameter reference by index
    TplParam(usize),
    /// Function name with its argument types
    Function { name: Box<Node>, args: Vec<Node> },
    /// Vtable for a type
    Vtable(Box<Node>),
    /// Vtt for a type
    Vtt(Box<Node>),
    /// Typeinfo structure for a type
    Typeinfo(Box<Node>),
    /// Typeinfo name for a type
    TypeinfoName(Box<Node>),
}

impl Node {
    /// Builds an unqualified name node.
    pub fn name(text: impl Into<String>) -> Node {
        Node::Name(text.into())
    }

    /// Stable lowercase label for the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Name(_) => "name",
            Node::QualName(_) => "qual_name",
            Node::TplArgs(_) => "tpl_args",
            Node::Ctor(_) => "ctor",
            Node::Dtor(_) => "dtor",
            Node::Operator(_) => "operator",
            Node::Pointer(_) => "pointer",
            Node::Lvalue(_) => "lvalue",
            Node::Rvalue(_) => "rvalue",
            Node::CvQual { .. } => "cv_qual",
            Node::Literal { .. } => "literal",
            Node::TplParam(_) => "tpl_param",
            Node::Function { .. } => "function",
            Node::Vtable(_) => "vtable",
            Node::Vtt(_) => "vtt",
            Node::Typeinfo(_) => "typeinfo",
            Node::TypeinfoName(_) => "typeinfo_name",
        }
    }

    /// Short text shown next to the kind label in tree dumps.
    pub fn display_label(&self) -> String {
        match self {
            Node::Name(text) => text.clone(),
            Node::Pointer(_) => "*".to_string(),
            Node::Lvalue(_) => "&".to_string(),
            Node::Rvalue(_) => "&&".to_string(),
            Node::CvQual { quals, .. } => quals.words().join(" "),
            Node::Literal { value, .. } => value.clone(),
            Node::Function { name, .. } => name.to_string(),
            Node::Vtable(inner)
            | Node::Vtt(inner)
            | Node::Typeinfo(inner)
            | Node::TypeinfoName(inner) => inner.to_string(),
            other => other.to_string(),
        }
    }

    /// Child nodes in rendering order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Name(_)
            | Node::Ctor(_)
            | Node::Dtor(_)
            | Node::Operator(_)
            | Node::TplParam(_) => Vec::new(),
            Node::QualName(elems) | Node::TplArgs(elems) => elems.iter().collect(),
            Node::Pointer(inner) | Node::Lvalue(inner) | Node::Rvalue(inner) => {
                vec![inner.as_ref()]
            }
            Node::CvQual { inner, .. } => vec![inner.as_ref()],
            Node::Literal { ty, .. } => vec![ty.as_ref()],
            Node::Function { name, args } => {
                let mut children = vec![name.as_ref()];
                children.extend(args.iter());
                children
            }
            Node::Vtable(inner)
            | Node::Vtt(inner)
            | Node::Typeinfo(inner)
            | Node::TypeinfoName(inner) => vec![inner.as_ref()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CvQualifiers, Node};

    #[test]
    fn test_cv_qualifiers_from_letters() {
        let quals = CvQualifiers::from_letters("KV");
        assert!(quals.is_const);
        assert!(quals.is_volatile);
        assert!(!quals.is_restrict);
    }

    #[test]
    fn test_cv_qualifiers_repeats_collapse() {
        assert_eq!(
            CvQualifiers::from_letters("VVV"),
            CvQualifiers::from_letters("V")
        );
    }

    #[test]
    fn test_cv_qualifiers_order_insensitive() {
        assert_eq!(
            CvQualifiers::from_letters("KV"),
            CvQualifiers::from_letters("VK")
        );
    }

    #[test]
    fn test_cv_qualifiers_empty() {
        assert!(CvQualifiers::from_letters("").is_empty());
        assert!(!CvQualifiers::from_letters("r").is_empty());
    }

    #[test]
    fn test_cv_words_canonical_order() {
        let quals = CvQualifiers {
            is_const: true,
            is_volatile: true,
            is_restrict: true,
        };
        assert_eq!(quals.words(), vec!["const", "volatile", "restrict"]);
    }

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(Node::name("foo").kind_name(), "name");
        assert_eq!(Node::TplArgs(Vec::new()).kind_name(), "tpl_args");
        assert_eq!(
            Node::Vtable(Box::new(Node::name("foo"))).kind_name(),
            "vtable"
        );
    }

    #[test]
    fn test_children_of_function() {
        let node = Node::Function {
            name: Box::new(Node::name("f")),
            args: vec![Node::name("int"), Node::name("char")],
        };
        let children = node.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], &Node::name("f"));
    }

    #[test]
    fn test_leaf_nodes_have_no_children() {
        assert!(Node::TplParam(3).children().is_empty());
        assert!(Node::Operator("+".to_string()).children().is_empty());
    }
}
