//! `jspec parse`: validate a JSPEC document and print it, pretty by default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jspec_lib::PrettyError;

pub struct ParseArgs {
    pub infile: Option<PathBuf>,
    pub outfile: Option<PathBuf>,
    pub pretty: bool,
    pub indent: String,
}

pub fn run(args: ParseArgs) {
    let (document, source_name) = match read_document(args.infile.as_deref()) {
        Ok(read) => read,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    };

    let output = if args.pretty {
        match jspec_lib::pretty(&document, &args.indent) {
            Ok(text) => text,
            Err(PrettyError::Scan(error)) => {
                eprintln!("{}", error.render(&document, source_name.as_deref()));
                std::process::exit(1);
            }
            Err(error) => {
                eprintln!("error: {error}");
                std::process::exit(1);
            }
        }
    } else {
        match jspec_lib::parse(&document) {
            Ok(pattern) => jspec_lib::render(&pattern),
            Err(error) => {
                eprintln!("{}", error.render(&document, source_name.as_deref()));
                std::process::exit(1);
            }
        }
    };

    match args.outfile {
        Some(path) => {
            if let Err(error) = fs::write(&path, format!("{output}\n")) {
                eprintln!("error: cannot write {}: {error}", path.display());
                std::process::exit(1);
            }
        }
        None => println!("{output}"),
    }
}

fn read_document(path: Option<&Path>) -> Result<(String, Option<String>), String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map(|document| (document, Some(path.display().to_string())))
            .map_err(|error| format!("cannot read {}: {error}", path.display())),
        None => io::read_to_string(io::stdin())
            .map(|document| (document, None))
            .map_err(|error| format!("cannot read stdin: {error}")),
    }
}
