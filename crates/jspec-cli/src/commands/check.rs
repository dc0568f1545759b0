//! `jspec check`: check a JSON document against a JSPEC document.
//!
//! Exit 0 when the JSON matches, and also when it does not (the one-line
//! reason goes to stdout). Non-zero only for scan errors, malformed JSON or
//! unusable input.

use std::fs;
use std::path::PathBuf;

use jspec_lib::EnvResolver;

pub struct CheckArgs {
    pub jspec_file: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub raw_jspec: Option<String>,
    pub raw_json: Option<String>,
}

pub fn run(args: CheckArgs) {
    let (document, source_name) = match (&args.jspec_file, args.raw_jspec) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(document) => (document, Some(path.display().to_string())),
            Err(error) => {
                eprintln!("error: cannot read {}: {error}", path.display());
                std::process::exit(1);
            }
        },
        (None, Some(raw)) => (raw, None),
        (None, None) => {
            eprintln!("error: provide a JSPEC file or --raw-jspec");
            std::process::exit(1);
        }
    };

    let pattern = match jspec_lib::parse(&document) {
        Ok(pattern) => pattern,
        Err(error) => {
            eprintln!("{}", error.render(&document, source_name.as_deref()));
            std::process::exit(1);
        }
    };

    let json_text = match (&args.json_file, args.raw_json) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                eprintln!("error: cannot read {}: {error}", path.display());
                std::process::exit(1);
            }
        },
        (None, Some(raw)) => raw,
        (None, None) => {
            eprintln!("error: provide a JSON file or --raw-json");
            std::process::exit(1);
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&json_text) {
        Ok(value) => value,
        Err(error) => {
            eprintln!("error: invalid JSON: {error}");
            std::process::exit(1);
        }
    };

    match jspec_lib::check(&pattern, &value, &EnvResolver) {
        Ok(verdict) => {
            if !verdict.matched {
                println!("{}", verdict.reason);
            }
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
