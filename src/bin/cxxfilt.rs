//! Command-line interface for cxxfilt
//! This binary demangles a single Itanium ABI symbol name and prints it in the
//! selected output format.
//!
//! Usage:
//!   cxxfilt `<mangled>` [--format `<format>`]  - Demangle one symbol

use clap::{Arg, Command};

use cxxfilt::itanium::processor::{available_formats, process_symbol, OutputFormat};

fn main() {
    let format_help = format!("Output format (one of {})", available_formats().join(", "));
    let matches = Command::new("cxxfilt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A demangler for Itanium C++ ABI symbol names")
        .arg(
            Arg::new("mangled")
                .help("The mangled symbol name, e.g. _ZN3fooC1E")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help(format_help)
                .default_value("summary"),
        )
        .get_matches();

    let mangled = matches.get_one::<String>("mangled").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    handle_demangle_command(mangled, format);
}

/// Handle the demangle invocation
fn handle_demangle_command(mangled: &str, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_symbol(mangled, &format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}
