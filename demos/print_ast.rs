//! Example usage of the demangler library
//!
//! This demonstrates how to parse mangled symbols into trees and
//! render them in the available output formats.
//!
//! Run with: cargo run --example print_ast

use cxxfilt::itanium::formats::{to_json_str, to_treeviz_str};
use cxxfilt::itanium::parse;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbols = [
        "_Z3foo",
        "_ZN5space3fooE",
        "_ZN3fooC1E",
        "_ZSt6vectorIiE",
        "_ZNK3fooIcE3barEv",
        "_Z1fIL_Z1gEE",
        "_ZTV1f",
    ];

    println!("=== Canonical Renderings ===");
    for symbol in symbols {
        let node = parse(symbol)?;
        println!("{:20} {}", symbol, node);
    }
    println!();

    println!("=== Tree Dump ===");
    let node = parse("_ZN5space3fooEii")?;
    print!("{}", to_treeviz_str(&node));
    println!();

    println!("=== JSON Dump ===");
    println!("{}", to_json_str(&node)?);

    Ok(())
}
