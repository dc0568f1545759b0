use super::*;

#[test]
fn multiplier_rendering() {
    assert_eq!(Multiplier::ONE.to_string(), "x1");
    assert_eq!(Multiplier::ANY.to_string(), "x?");
    assert_eq!(Multiplier::new(Some(4), Some(4)).to_string(), "x4");
    assert_eq!(Multiplier::new(Some(2), Some(7)).to_string(), "x2-7");
    assert_eq!(Multiplier::new(Some(2), None).to_string(), "x2-?");
    assert_eq!(Multiplier::new(None, Some(3)).to_string(), "x?-3");
}

#[test]
fn unmarked_multiplier_renders_without_suffix() {
    assert_eq!(Multiplier::ONE.suffix(), "");
    assert_eq!(Multiplier::new(Some(2), None).suffix(), "x2-?");
}

#[test]
fn multiplier_validity() {
    assert!(Multiplier::new(Some(2), Some(2)).is_valid());
    assert!(Multiplier::new(Some(2), None).is_valid());
    assert!(Multiplier::new(None, Some(0)).is_valid());
    assert!(!Multiplier::new(Some(3), Some(2)).is_valid());
}

#[test]
fn reduced_decrements_and_floors() {
    let reduced = Multiplier::new(Some(2), Some(3)).reduced();
    assert_eq!(reduced, Multiplier::new(Some(1), Some(2)));
    assert_eq!(reduced.reduced(), Multiplier::new(Some(0), Some(1)));
    assert_eq!(
        reduced.reduced().reduced(),
        Multiplier::new(Some(0), Some(0))
    );
}

#[test]
fn any_is_a_fixed_point_under_reduced() {
    assert_eq!(Multiplier::ANY.reduced(), Multiplier::ANY);
    assert!(Multiplier::ANY.satisfied());
    assert!(!Multiplier::ANY.exhausted());
}

#[test]
fn satisfied_and_exhausted() {
    assert!(Multiplier::new(Some(0), Some(3)).satisfied());
    assert!(!Multiplier::new(Some(1), Some(3)).satisfied());
    assert!(Multiplier::new(Some(0), Some(0)).exhausted());
    assert!(!Multiplier::new(Some(0), Some(1)).exhausted());
    assert_eq!(Multiplier::new(Some(4), None).remaining_minimum(), 4);
}

#[test]
fn array_capture_rendering_caches_source_form() {
    let group = ArrayCapture::new(
        vec![Term::Int(2), Term::Int(3)],
        vec![LogicalOp::Or],
        Multiplier::new(Some(2), None),
    );
    assert_eq!(group.rendering(), "(2 | 3)x2-?");
    assert_eq!(group.to_string(), "(2 | 3)x2-?");
}

#[test]
fn unmarked_group_renders_without_multiplier() {
    let group = ArrayCapture::new(
        vec![Term::Int(2), Term::Int(3)],
        vec![LogicalOp::Or],
        Multiplier::ONE,
    );
    assert_eq!(group.rendering(), "(2 | 3)");
}

#[test]
fn object_capture_rendering() {
    let group = ObjectCapture::new(
        vec![
            ObjectPair::new(Term::String("a".to_string()), Term::Int(1)),
            ObjectPair::new(Term::String("b".to_string()), Term::Int(8)),
        ],
        vec![LogicalOp::Or],
        Multiplier::new(None, Some(3)),
    );
    assert_eq!(group.rendering(), r#"("a": 1 | "b": 8)x?-3"#);
}

#[test]
fn ellipsis_groups() {
    let array = ArrayCapture::ellipsis();
    assert!(array.is_ellipsis());
    assert_eq!(array.rendering(), "...");
    assert_eq!(array.terms, vec![Term::Wildcard]);
    assert_eq!(array.multiplier, Multiplier::ANY);
    assert!(array.satisfied());
    assert!(!array.exhausted());

    let object = ObjectCapture::ellipsis();
    assert!(object.is_ellipsis());
    assert_eq!(object.rendering(), "...");
    assert_eq!(object.pairs[0].key, Term::StringAny);
    assert_eq!(object.pairs[0].value, Term::Wildcard);
}

#[test]
fn group_equality_is_rendering_plus_multiplier() {
    let make = || {
        ArrayCapture::new(
            vec![Term::Int(1)],
            Vec::new(),
            Multiplier::new(Some(2), Some(2)),
        )
    };
    assert_eq!(make(), make());

    // The ellipsis renders differently from its explicit spelling, so they
    // are distinct groups even though they match identically.
    let explicit = ArrayCapture::new(vec![Term::Wildcard], Vec::new(), Multiplier::ANY);
    assert_ne!(ArrayCapture::ellipsis(), explicit);
}

#[test]
fn object_pair_rendering() {
    let pair = ObjectPair::new(Term::String("key".to_string()), Term::IntBound(None));
    assert_eq!(pair.rendering(), r#""key": int"#);
    assert_eq!(pair.to_string(), r#""key": int"#);
}
