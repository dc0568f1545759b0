//! End-to-end scenarios over the public surface.

use serde_json::{Value, json};

use super::{EnvResolver, Pattern, Term, check, parse, pretty, render};

fn verdict(doc: &str, value: &Value) -> (bool, String) {
    let pattern = parse(doc).expect(doc);
    let verdict = check(&pattern, value, &EnvResolver).expect("well-formed pattern");
    (verdict.matched, verdict.reason)
}

#[test]
fn seed_suite() {
    assert!(verdict("[1,(2|3)x2-?,4]", &json!([1, 2, 3, 3, 2, 4])).0);

    let (matched, reason) = verdict("[1,(2|3)x2-?,4]", &json!([1, 2, 4]));
    assert!(!matched);
    assert_eq!(
        reason,
        "At location $ - exhausted JSON array, no JSON element left to match '(2 | 3)x2-?'"
    );

    assert!(
        verdict(
            r#"{"id":int>=0,"name":string,...}"#,
            &json!({"id": 7, "name": "x", "extra": null})
        )
        .0
    );

    let (matched, reason) = verdict(
        r#"{"id":int>=0,"name":string}"#,
        &json!({"id": 7, "name": "x", "extra": null}),
    );
    assert!(!matched);
    assert!(reason.starts_with("At location $ - "), "{reason}");
    assert!(reason.contains(r#""extra": null"#), "{reason}");

    let (matched, reason) = verdict("!(int | real)", &json!(3.14));
    assert!(!matched);
    assert!(reason.starts_with("At location $ - "), "{reason}");

    assert!(verdict("(int < 5 & int > 0)", &json!(3)).0);

    let (matched, reason) = verdict(
        r#"{("k\d":int)x?-3}"#,
        &json!({"k1": 1, "k2": 2, "k3": 3, "k4": 4}),
    );
    assert!(!matched);
    assert!(reason.contains(r#""k4": 4"#), "{reason}");

    assert!(verdict(r#""rege(x(es)?|xps?)""#, &json!("regexps")).0);
}

#[test]
fn parse_render_round_trip() {
    let docs = [
        "null",
        "true",
        "-17",
        "10.01",
        "1e-10",
        r#""\w\d""#,
        "*",
        "<ENV_NAME>",
        "object",
        "int >= 0",
        "real < 5.2",
        "number <= 6",
        "!4",
        "!(int | real)",
        "(1 | 3 ^ 4 & 2)",
        "[1, (2 | 3)x2-?, 4]",
        "[3, 4, ...]",
        r#"{"id": int >= 0, "name": string, ...}"#,
        r#"{("k\d": int)x?-3, "fixed": true}"#,
        r#"{string: *}"#,
        "[[1, [2, [3]]], {}]",
    ];
    for doc in docs {
        let pattern = parse(doc).expect(doc);
        let reparsed = parse(&render(&pattern)).expect(doc);
        assert_eq!(pattern, reparsed, "round-trip failed for {doc}");
    }
}

#[test]
fn pretty_is_idempotent() {
    let docs = [
        r#"{"a": 1, "b": [1, 2, (3 | 4)x?], "c": {"d": null}} // tail"#,
        "[1, /* keep */ 2, 3]",
        "{ // head\n\"a\": *, ...}",
    ];
    for doc in docs {
        let once = pretty(doc, "    ").expect(doc);
        let twice = pretty(&once, "    ").expect(doc);
        assert_eq!(once, twice, "pretty not idempotent for {doc}");
    }
}

#[test]
fn pretty_preserves_semantics() {
    let cases: [(&str, Value); 4] = [
        ("[1, (2 | 3)x2-?, 4]", json!([1, 2, 3, 4])),
        ("[1, (2 | 3)x2-?, 4]", json!([1, 2, 4])),
        (
            r#"{"id": int >= 0, "name": string, ...}"#,
            json!({"id": 7, "name": "x", "extra": null}),
        ),
        ("!(int | real)", json!("3.14")),
    ];
    for (doc, value) in cases {
        let direct = verdict(doc, &value);
        let reformatted = pretty(doc, "\t").expect(doc);
        let through_pretty = verdict(&reformatted, &value);
        assert_eq!(direct, through_pretty, "semantics changed for {doc}");
    }
}

#[test]
fn negation_is_an_involution() {
    let docs = ["null", "4", r#""a+""#, "[1, 2]", r#"{"a": 1}"#, "(1 | 2)"];
    let values = [json!(null), json!(4), json!("aaa"), json!([1, 2]), json!(7)];
    for doc in docs {
        let base = parse(doc).expect(doc);
        let doubled = Pattern::new(Term::Negation(Box::new(Term::Negation(Box::new(
            base.root.clone(),
        )))));
        for value in &values {
            let direct = check(&base, value, &EnvResolver).expect("ok").matched;
            let twice = check(&doubled, value, &EnvResolver).expect("ok").matched;
            assert_eq!(direct, twice, "involution failed for {doc} vs {value}");
        }
    }
}

#[test]
fn ellipsis_is_equivalent_to_a_permissive_capture() {
    let values = [
        json!([1, 4]),
        json!([1, 2, 3, 4]),
        json!([4]),
        json!([1, "x", null, 4]),
    ];
    for value in &values {
        assert_eq!(
            verdict("[1, ..., 4]", value).0,
            verdict("[1, (*)x?, 4]", value).0,
            "array ellipsis diverged for {value}"
        );
    }

    let objects = [
        json!({"id": 1}),
        json!({"id": 1, "extra": null}),
        json!({"extra": null}),
    ];
    for value in &objects {
        assert_eq!(
            verdict(r#"{"id": int, ...}"#, value).0,
            verdict(r#"{"id": int, (string: *)x?}"#, value).0,
            "object ellipsis diverged for {value}"
        );
    }
}

#[test]
fn scan_errors_render_with_context() {
    let doc = r#"{"a": 1 "b": 2}"#;
    let error = parse(doc).expect_err("missing comma");
    let rendered = error.render(doc, Some("bad.jspec"));
    assert!(rendered.contains("Expecting object pair delimiter ','"), "{rendered}");
    assert!(rendered.contains("bad.jspec"), "{rendered}");
}
