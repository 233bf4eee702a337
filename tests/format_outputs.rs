//! Tests for the rendered output formats
//!
//! Covers the processing entry point used by the command line tool,
//! the tree dump layout and the JSON and YAML serializations.

use cxxfilt::itanium::formats::{to_json_str, to_treeviz_str, to_yaml_str};
use cxxfilt::itanium::processor::{
    available_formats, process_symbol, OutputFormat, ProcessingError,
};
use cxxfilt::itanium::testing::parse_ok;
use cxxfilt::DemangleError;
use rstest::rstest;
use serde_json::json;

const SHOWCASE_SYMBOLS: &[&str] = &[
    "_Z3foo",
    "_ZN5space3fooE",
    "_ZN3fooC1E",
    "_ZSt6vectorIiE",
    "_ZNK3fooIcE3barEv",
    "_Z1fIL_Z1gEE",
    "_ZTV1f",
];

#[rstest(format => [
    OutputFormat::Summary,
    OutputFormat::Demangled,
    OutputFormat::AstTreeviz,
    OutputFormat::AstJson,
    OutputFormat::AstYaml
])]
fn test_every_format_renders_every_showcase_symbol(format: OutputFormat) {
    for symbol in SHOWCASE_SYMBOLS {
        let output = process_symbol(symbol, &format)
            .unwrap_or_else(|err| panic!("{} failed to render: {}", symbol, err));
        assert!(!output.is_empty(), "empty output for {}", symbol);
    }
}

#[test]
fn test_format_names_round_trip() {
    for name in available_formats() {
        assert!(
            OutputFormat::from_string(&name).is_ok(),
            "format {} should parse",
            name
        );
    }
}

#[test]
fn test_unknown_format_is_reported() {
    let err = OutputFormat::from_string("dot").unwrap_err();
    assert_eq!(err, ProcessingError::InvalidFormat("dot".to_string()));
    assert!(err.to_string().contains("dot"));
}

#[test]
fn test_demangle_failures_carry_the_cause() {
    let err = process_symbol("junk", &OutputFormat::Demangled).unwrap_err();
    assert_eq!(err, ProcessingError::Demangle(DemangleError::MalformedPrefix));
}

#[test]
fn test_demangled_format_is_the_plain_rendering() {
    let output = process_symbol("_ZN3foo3barE", &OutputFormat::Demangled).unwrap();
    assert_eq!(output, "foo::bar");
}

#[test]
fn test_canonical_renderings() {
    insta::assert_snapshot!(
        process_symbol("_ZN5space3fooEii", &OutputFormat::Demangled).unwrap(),
        @"space::foo(int, int)"
    );
    insta::assert_snapshot!(
        process_symbol("_ZNK3fooIcE3barEv", &OutputFormat::Demangled).unwrap(),
        @"foo<char>::bar const()"
    );
    insta::assert_snapshot!(
        process_symbol("_Z1fIL_Z1gEE", &OutputFormat::Demangled).unwrap(),
        @"f<g>"
    );
    insta::assert_snapshot!(
        process_symbol("_ZTV1f", &OutputFormat::Demangled).unwrap(),
        @"vtable for f"
    );
}

#[test]
fn test_summary_combines_tree_and_rendering() {
    let output = process_symbol("_Z3foo", &OutputFormat::Summary).unwrap();
    assert_eq!(output, "└─ name: foo\n\nfoo");
}

#[test]
fn test_treeviz_layout() {
    let expected = concat!(
        "└─ function: space::foo\n",
        "  ├─ qual_name: space::foo\n",
        "  │ ├─ name: space\n",
        "  │ └─ name: foo\n",
        "  └─ name: int\n",
    );
    assert_eq!(to_treeviz_str(&parse_ok("_ZN5space3fooEi")), expected);
}

#[test]
fn test_treeviz_truncates_long_labels() {
    let tree = to_treeviz_str(&parse_ok("_Z35abcdefghijklmnopqrstuvwxyz123456789"));
    assert_eq!(tree, "└─ name: abcdefghijklmnopqrstuvwxyz1234...\n");
}

#[test]
fn test_json_pretty_layout() {
    let output = to_json_str(&parse_ok("_Z1fi")).unwrap();
    insta::assert_snapshot!(output, @r#"
    {
      "function": {
        "name": {
          "name": "f"
        },
        "args": [
          {
            "name": "int"
          }
        ]
      }
    }
    "#);
}

#[test]
fn test_json_structure_of_a_destructor() {
    let output = process_symbol("_ZN3fooD1Ev", &OutputFormat::AstJson).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        json!({
            "function": {
                "name": {
                    "qual_name": [{ "name": "foo" }, { "dtor": "complete" }]
                },
                "args": [{ "name": "void" }]
            }
        })
    );
}

#[test]
fn test_yaml_mentions_the_node_kinds() {
    let output = to_yaml_str(&parse_ok("_Z1fPi")).unwrap();
    assert!(output.contains("function"));
    assert!(output.contains("pointer"));
    assert!(output.contains("int"));
}

#[test]
fn test_yaml_and_json_agree_on_content() {
    let node = parse_ok("_ZSs");
    let yaml = to_yaml_str(&node).unwrap();
    let json = to_json_str(&node).unwrap();
    for word in ["std", "string", "qual_name"] {
        assert!(yaml.contains(word), "yaml missing {}", word);
        assert!(json.contains(word), "json missing {}", word);
    }
}

#[test]
fn test_trailing_newline_conventions() {
    assert!(!process_symbol("_Z3foo", &OutputFormat::Demangled)
        .unwrap()
        .ends_with('\n'));
    assert!(process_symbol("_Z3foo", &OutputFormat::AstTreeviz)
        .unwrap()
        .ends_with('\n'));
    assert!(!process_symbol("_Z3foo", &OutputFormat::AstJson)
        .unwrap()
        .ends_with('\n'));
    assert!(process_symbol("_Z3foo", &OutputFormat::AstYaml)
        .unwrap()
        .ends_with('\n'));
}
