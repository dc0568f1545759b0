//! Command definitions and parameter extraction.

use std::path::PathBuf;

use clap::{ArgMatches, Command};

use super::args::{
    indent_arg, infile_arg, jspec_file_arg, json_file_arg, outfile_arg, pretty_arg, raw_jspec_arg,
    raw_json_arg,
};
use crate::commands::check::CheckArgs;
use crate::commands::parse::ParseArgs;

pub fn build_cli() -> Command {
    Command::new("jspec")
        .about("Validate and pretty-print JSPEC documents, and check JSON against them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Validate a JSPEC document and print it, pretty by default")
                .arg(infile_arg())
                .arg(outfile_arg())
                .arg(pretty_arg())
                .arg(indent_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Check a JSON document against a JSPEC document")
                .arg(jspec_file_arg())
                .arg(json_file_arg())
                .arg(raw_jspec_arg())
                .arg(raw_json_arg()),
        )
}

pub struct ParseParams {
    pub infile: Option<PathBuf>,
    pub outfile: Option<PathBuf>,
    pub pretty: bool,
    pub indent: String,
}

impl ParseParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            infile: matches.get_one::<PathBuf>("infile").cloned(),
            outfile: matches.get_one::<PathBuf>("outfile").cloned(),
            pretty: matches
                .get_one::<String>("pretty")
                .is_none_or(|value| value == "true"),
            indent: matches
                .get_one::<String>("indent")
                .cloned()
                .unwrap_or_else(|| "\t".to_string()),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(params: ParseParams) -> Self {
        Self {
            infile: params.infile,
            outfile: params.outfile,
            pretty: params.pretty,
            indent: params.indent,
        }
    }
}

pub struct CheckParams {
    pub jspec_file: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub raw_jspec: Option<String>,
    pub raw_json: Option<String>,
}

impl CheckParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            jspec_file: matches.get_one::<PathBuf>("jspec_file").cloned(),
            json_file: matches.get_one::<PathBuf>("json_file").cloned(),
            raw_jspec: matches.get_one::<String>("raw_jspec").cloned(),
            raw_json: matches.get_one::<String>("raw_json").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(params: CheckParams) -> Self {
        Self {
            jspec_file: params.jspec_file,
            json_file: params.json_file,
            raw_jspec: params.raw_jspec,
            raw_json: params.raw_json,
        }
    }
}
