//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// JSPEC input file (positional); stdin when omitted.
pub fn infile_arg() -> Arg {
    Arg::new("infile")
        .value_name("INFILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSPEC file to validate or pretty-print (stdin if omitted)")
}

/// Output file (positional); stdout when omitted.
pub fn outfile_arg() -> Arg {
    Arg::new("outfile")
        .value_name("OUTFILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the output to this file instead of stdout")
}

/// Pretty-print toggle (--pretty).
pub fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .value_name("BOOL")
        .default_value("true")
        .value_parser(["true", "false"])
        .help("Pretty-print the document, preserving comments")
}

/// Indentation string (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("STRING")
        .default_value(jspec_lib::scanner::DEFAULT_INDENT)
        .help("Indentation for pretty-printing (spaces and tabs only)")
}

/// JSPEC document to check against (positional).
pub fn jspec_file_arg() -> Arg {
    Arg::new("jspec_file")
        .value_name("JSPEC")
        .value_parser(value_parser!(PathBuf))
        .help("JSPEC file to be checked against")
}

/// JSON document to check (positional).
pub fn json_file_arg() -> Arg {
    Arg::new("json_file")
        .value_name("JSON")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file to be checked")
}

/// Inline JSPEC text (--raw-jspec).
pub fn raw_jspec_arg() -> Arg {
    Arg::new("raw_jspec")
        .long("raw-jspec")
        .value_name("STRING")
        .help("Raw JSPEC document, if no file is given")
}

/// Inline JSON text (--raw-json).
pub fn raw_json_arg() -> Arg {
    Arg::new("raw_json")
        .long("raw-json")
        .value_name("STRING")
        .help("Raw JSON document, if no file is given")
}
