use indexmap::IndexSet;

use super::*;

fn object(entries: Vec<ObjectEntry>) -> Term {
    Term::Object(ObjectTerm::new(entries.into_iter().collect::<IndexSet<_>>()))
}

#[test]
fn primitive_rendering() {
    assert_eq!(Term::Null.to_string(), "null");
    assert_eq!(Term::Bool(true).to_string(), "true");
    assert_eq!(Term::Bool(false).to_string(), "false");
    assert_eq!(Term::Int(-17).to_string(), "-17");
    assert_eq!(Term::String(r"\w\d".to_string()).to_string(), r#""\w\d""#);
    assert_eq!(Term::Wildcard.to_string(), "*");
    assert_eq!(Term::Macro("ENV_1".to_string()).to_string(), "<ENV_1>");
}

#[test]
fn real_rendering_round_trips_as_real() {
    // An integral real must keep its fractional marker.
    assert_eq!(Term::Real(1000.0).to_string(), "1000.0");
    assert_eq!(Term::Real(10.01).to_string(), "10.01");
    assert_eq!(Term::Real(-2.5).to_string(), "-2.5");
}

#[test]
fn placeholder_rendering() {
    assert_eq!(Term::ObjectAny.to_string(), "object");
    assert_eq!(Term::ArrayAny.to_string(), "array");
    assert_eq!(Term::StringAny.to_string(), "string");
    assert_eq!(Term::BoolAny.to_string(), "bool");
    assert_eq!(Term::IntBound(None).to_string(), "int");
    assert_eq!(Term::RealBound(None).to_string(), "real");
    assert_eq!(Term::NumberBound(None).to_string(), "number");
}

#[test]
fn bounded_placeholder_rendering() {
    let bound = Bound::new(Ineq::MoreThanOrEqual, serde_json::Number::from(0));
    assert_eq!(Term::IntBound(Some(bound)).to_string(), "int >= 0");

    let real = Bound::new(
        Ineq::LessThan,
        serde_json::Number::from_f64(5.2).expect("finite"),
    );
    assert_eq!(Term::RealBound(Some(real)).to_string(), "real < 5.2");
}

#[test]
fn conditional_rendering_is_space_joined() {
    let conditional = Conditional::new(
        vec![Term::Int(1), Term::Int(3), Term::Int(4)],
        vec![LogicalOp::Or, LogicalOp::Xor],
    );
    assert_eq!(conditional.to_string(), "(1 | 3 ^ 4)");
}

#[test]
fn negation_rendering() {
    let negation = Term::Negation(Box::new(Term::Conditional(Conditional::new(
        vec![Term::IntBound(None), Term::RealBound(None)],
        vec![LogicalOp::Or],
    ))));
    assert_eq!(negation.to_string(), "!(int | real)");
}

#[test]
fn container_rendering() {
    let array = Term::Array(ArrayTerm::new(vec![
        ArrayEntry::Term(Term::Int(1)),
        ArrayEntry::Capture(ArrayCapture::ellipsis()),
        ArrayEntry::Term(Term::Int(4)),
    ]));
    assert_eq!(array.to_string(), "[1, ..., 4]");

    let object = object(vec![
        ObjectEntry::Pair(ObjectPair::new(
            Term::String("id".to_string()),
            Term::IntBound(None),
        )),
        ObjectEntry::Capture(ObjectCapture::ellipsis()),
    ]);
    assert_eq!(object.to_string(), r#"{"id": int, ...}"#);
}

#[test]
fn placeholders_equal_same_kind_and_bound() {
    assert_eq!(Term::IntBound(None), Term::IntBound(None));
    let bound = || Some(Bound::new(Ineq::LessThan, serde_json::Number::from(5)));
    assert_eq!(Term::IntBound(bound()), Term::IntBound(bound()));
    assert_ne!(Term::IntBound(bound()), Term::IntBound(None));
    assert_ne!(Term::IntBound(None), Term::NumberBound(None));
}

#[test]
fn int_and_real_are_distinct() {
    assert_ne!(Term::Int(1), Term::Real(1.0));
}

#[test]
fn object_entries_compare_as_sets() {
    let a = object(vec![
        ObjectEntry::Pair(ObjectPair::new(Term::String("a".into()), Term::Int(1))),
        ObjectEntry::Pair(ObjectPair::new(Term::String("b".into()), Term::Int(2))),
    ]);
    let b = object(vec![
        ObjectEntry::Pair(ObjectPair::new(Term::String("b".into()), Term::Int(2))),
        ObjectEntry::Pair(ObjectPair::new(Term::String("a".into()), Term::Int(1))),
    ]);
    assert_eq!(a, b);
}
