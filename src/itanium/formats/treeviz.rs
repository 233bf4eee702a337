//! Treeviz formatter for demangled name trees

use crate::itanium::ast::Node;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Renders the tree as indented lines with box drawing connectors.
pub fn to_treeviz_str(node: &Node) -> String {
    let mut result = String::new();
    append_node(&mut result, node, "", true);
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.kind_name(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        append_node(result, child, &new_prefix, i == children.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::to_treeviz_str;
    use crate::itanium::parser::parse;

    #[test]
    fn test_function_tree() {
        let node = parse("_Z1fPi").unwrap();
        assert_eq!(
            to_treeviz_str(&node),
            "└─ function: f\n  ├─ name: f\n  └─ pointer: *\n    └─ name: int\n"
        );
    }

    #[test]
    fn test_qual_name_tree() {
        let node = parse("_ZN3fooC1E").unwrap();
        assert_eq!(
            to_treeviz_str(&node),
            "└─ qual_name: foo::{ctor}\n  ├─ name: foo\n  └─ ctor: {ctor}\n"
        );
    }

    #[test]
    fn test_middle_children_use_branch_connector() {
        let node = parse("_Z1fic").unwrap();
        let tree = to_treeviz_str(&node);
        assert_eq!(
            tree,
            "└─ function: f\n  ├─ name: f\n  ├─ name: int\n  └─ name: char\n"
        );
    }

    #[test]
    fn test_long_labels_truncate() {
        let raw = format!("_Z40{}", "a".repeat(40));
        let node = parse(&raw).unwrap();
        let tree = to_treeviz_str(&node);
        assert!(tree.contains("..."));
        assert!(!tree.contains(&"a".repeat(40)));
    }
}
