use indoc::indoc;

use super::error::PrettyError;
use super::pretty::{DEFAULT_INDENT, pretty};

fn pretty_tab(doc: &str) -> String {
    pretty(doc, DEFAULT_INDENT).expect(doc)
}

#[test]
fn reindents_nested_containers() {
    let out = pretty(r#"{"a": 1, "b": [1, 2]}"#, "    ").expect("valid document");
    assert_eq!(
        out,
        indoc! {r#"
            {
                "a": 1,
                "b": [
                    1,
                    2
                ]
            }"#}
    );
}

#[test]
fn reindents_with_comments() {
    let doc = r#"{ // ids are assigned by the gateway
"id": int >= 0, "tags": [1, 2]}"#;
    insta::assert_snapshot!(pretty(doc, "    ").expect("valid document"), @r#"
    {
        // ids are assigned by the gateway
        "id": int >= 0,
        "tags": [
            1,
            2
        ]
    }
    "#);
}

#[test]
fn empty_containers_stay_compact() {
    assert_eq!(pretty_tab("{ }"), "{}");
    assert_eq!(pretty_tab("[  ]"), "[]");
    assert_eq!(pretty_tab(r#"{"a": {}}"#), "{\n\t\"a\": {}\n}");
}

#[test]
fn flat_terms_stay_flat() {
    assert_eq!(pretty_tab("int >= 0"), "int >= 0");
    assert_eq!(pretty_tab("(1 | 3 ^ 4)"), "(1 | 3 ^ 4)");
    assert_eq!(pretty_tab("!(int | real)"), "!(int | real)");
}

#[test]
fn captures_keep_their_multipliers() {
    assert_eq!(
        pretty_tab("[1,(2|3)x2-?,4]"),
        "[\n\t1,\n\t(2 | 3)x2-?,\n\t4\n]"
    );
}

#[test]
fn redundant_multiplier_does_not_shift_comments() {
    // The explicit x1 normalises away; the comment stays in the gap before
    // the comma rather than sliding onto the next element.
    let out = pretty_tab("[(1|2)x1 // c\n, 3]");
    assert_eq!(out, "[\n\t(1 | 2) // c\n\t,\n\t3\n]");
}

#[test]
fn line_comments_are_preserved_at_their_gap() {
    let out = pretty_tab("{ // note\n\"a\": 1}");
    assert_eq!(out, "{\n\t// note\n\t\"a\": 1\n}");
}

#[test]
fn block_comments_stay_inline() {
    let out = pretty_tab(r#"{"a": /* why */ 1}"#);
    assert_eq!(out, "{\n\t\"a\": /* why */ 1\n}");
}

#[test]
fn trailing_comment_survives() {
    let out = pretty_tab("1 // done");
    assert_eq!(out, "1 // done");
}

#[test]
fn idempotent_on_already_pretty_input() {
    let docs = [
        r#"{"a": 1, "b": [1, 2], "c": {"d": null}}"#,
        "{ // note\n\"a\": 1}",
        r#"{"a": /* why */ 1, "b": [true, false], ...}"#,
        "[1, (2 | 3)x2-?, 4]",
        "[(1|2)x1 // c\n, 3]",
    ];
    for doc in docs {
        let once = pretty_tab(doc);
        let twice = pretty_tab(&once);
        assert_eq!(once, twice, "not idempotent for {doc}");
    }
}

#[test]
fn indent_must_be_spaces_or_tabs() {
    match pretty("{}", "ab") {
        Err(PrettyError::Indent(indent)) => assert_eq!(indent, "ab"),
        other => panic!("expected indent error, got {other:?}"),
    }
    assert!(pretty("{}", " \t ").is_ok());
}

#[test]
fn scan_errors_pass_through() {
    match pretty("[1,,2]", "\t") {
        Err(PrettyError::Scan(error)) => {
            assert_eq!(error.message, "Expecting JSPEC term in array");
        }
        other => panic!("expected scan error, got {other:?}"),
    }
}
