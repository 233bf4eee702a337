//! Property-based tests for the demangler
//!
//! These tests ensure the parser is total: any input, hostile or not,
//! maps to a tree or an error without panicking, and the same input
//! always maps to the same result.

use cxxfilt::itanium::formats::{to_json_str, to_treeviz_str, to_yaml_str};
use cxxfilt::{parse, Node};
use proptest::prelude::*;

/// Totality and determinism over arbitrary input
#[cfg(test)]
mod totality_tests {
    use super::*;

    /// Generate arbitrary input, printable or otherwise
    fn arbitrary_input_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Any string at all
            any::<String>(),
            // Printable ASCII
            "[ -~]{0,48}",
            // The right marker followed by anything
            "_Z.{0,32}",
        ]
    }

    /// Generate inputs shaped like mangled names
    fn mangled_like_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Marker plus identifier characters
            "_Z[a-zA-Z0-9_]{0,24}",
            // Marker plus the letters the grammar dispatches on
            "_Z[NISTCDLEPROKVr0-9]{0,24}",
        ]
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(input in arbitrary_input_strategy()) {
            let _ = parse(&input);
        }

        #[test]
        fn test_parse_never_panics_on_mangled_like_input(input in mangled_like_strategy()) {
            let _ = parse(&input);
        }

        #[test]
        fn test_parse_is_deterministic(input in mangled_like_strategy()) {
            prop_assert_eq!(parse(&input), parse(&input));
        }

        #[test]
        fn test_output_formats_are_total(input in mangled_like_strategy()) {
            if let Ok(node) = parse(&input) {
                let _ = node.to_string();
                let _ = to_treeviz_str(&node);
                prop_assert!(to_json_str(&node).is_ok());
                prop_assert!(to_yaml_str(&node).is_ok());
            }
        }

        #[test]
        fn test_deep_pointer_chains_stay_bounded(count in 1usize..300) {
            let mangled = format!("_Z1f{}i", "P".repeat(count));
            let result = parse(&mangled);
            if count < 90 {
                prop_assert!(result.is_ok());
            }
        }
    }
}

/// Grammar equivalences that hold for whole input families
#[cfg(test)]
mod grammar_property_tests {
    use super::*;

    /// Generate well formed source names
    fn source_name_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_]{0,15}"
    }

    proptest! {
        #[test]
        fn test_source_names_round_trip(name in source_name_strategy()) {
            let mangled = format!("_Z{}{}", name.len(), name);
            prop_assert_eq!(parse(&mangled), Ok(Node::name(name.clone())));
        }

        #[test]
        fn test_single_void_renders_an_empty_argument_list(name in source_name_strategy()) {
            let mangled = format!("_Z{}{}v", name.len(), name);
            let node = parse(&mangled);
            prop_assert!(node.is_ok());
            prop_assert_eq!(node.unwrap().to_string(), format!("{}()", name));
        }

        #[test]
        fn test_qualifier_runs_collapse(
            letter in prop_oneof![Just('K'), Just('V'), Just('r')],
            count in 1usize..12,
        ) {
            let run: String = std::iter::repeat(letter).take(count).collect();
            let repeated = format!("_Z1f{}i", run);
            let single = format!("_Z1f{}i", letter);
            prop_assert_eq!(parse(&repeated), parse(&single));
        }

        #[test]
        fn test_qualifier_letter_order_does_not_matter(
            perm in prop::sample::select(vec!["KVr", "KrV", "VKr", "VrK", "rKV", "rVK"]),
        ) {
            let mangled = format!("_Z1f{}i", perm);
            prop_assert_eq!(parse(&mangled), parse("_Z1frVKi"));
        }
    }
}
