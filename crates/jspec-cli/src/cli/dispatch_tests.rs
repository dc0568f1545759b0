use super::*;

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn parse_defaults() {
    let matches = build_cli().get_matches_from(["jspec", "parse"]);
    let Some(("parse", m)) = matches.subcommand() else {
        panic!("expected parse subcommand");
    };
    let params = ParseParams::from_matches(m);
    assert!(params.infile.is_none());
    assert!(params.outfile.is_none());
    assert!(params.pretty);
    assert_eq!(params.indent, "\t");
}

#[test]
fn parse_flags() {
    let matches = build_cli().get_matches_from([
        "jspec", "parse", "in.jspec", "out.jspec", "--pretty", "false", "--indent", "  ",
    ]);
    let Some(("parse", m)) = matches.subcommand() else {
        panic!("expected parse subcommand");
    };
    let params = ParseParams::from_matches(m);
    assert!(params.infile.is_some());
    assert!(params.outfile.is_some());
    assert!(!params.pretty);
    assert_eq!(params.indent, "  ");
}

#[test]
fn check_raw_flags() {
    let matches = build_cli().get_matches_from([
        "jspec",
        "check",
        "--raw-jspec",
        "[1, ..., 4]",
        "--raw-json",
        "[1, 2, 4]",
    ]);
    let Some(("check", m)) = matches.subcommand() else {
        panic!("expected check subcommand");
    };
    let params = CheckParams::from_matches(m);
    assert!(params.jspec_file.is_none());
    assert!(params.json_file.is_none());
    assert_eq!(params.raw_jspec.as_deref(), Some("[1, ..., 4]"));
    assert_eq!(params.raw_json.as_deref(), Some("[1, 2, 4]"));
}
