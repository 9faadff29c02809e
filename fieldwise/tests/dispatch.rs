mod common;

use common::{point, span};
use fieldwise::{
    ErrorKind, Method, Param, ReflectError, Shape, Signature, Value, fields, get_field, replace,
    vmap,
};

type ProbeFn = fn() -> &'static str;

fn left() -> &'static str {
    "left"
}
fn right() -> &'static str {
    "right"
}

#[test]
fn shape_of_covers_every_category() {
    assert_eq!(Shape::of(&point(0.0, 0.0)), Shape::Record);
    assert_eq!(Shape::of(&Value::Map(vmap! {})), Shape::Mapping);
    assert_eq!(Shape::of(&span(0, 1)), Shape::CopyReplace);
    assert_eq!(Shape::of(&Value::Int(1)), Shape::Other);
    assert_eq!(Shape::of(&Value::Null), Shape::Other);
    assert_eq!(Shape::of(&Value::opaque(7)), Shape::Other);
}

#[test]
fn incomparable_signatures_are_ambiguous() {
    // (record, any) and (any, mapping) both match (record, mapping) but
    // neither is more specific than the other in every position.
    const LEFT: &[Param] = &[Param::Is(Shape::Record), Param::Any];
    const RIGHT: &[Param] = &[Param::Any, Param::Is(Shape::Mapping)];

    let mut m: Method<ProbeFn> = Method::new("probe");
    m.register(Signature::new(LEFT), left);
    m.register(Signature::new(RIGHT), right);

    let err = m.resolve(&[Shape::Record, Shape::Mapping]).unwrap_err();
    assert_eq!(
        err,
        ReflectError::AmbiguousImpl {
            op: "probe",
            shapes: vec![Shape::Record, Shape::Mapping],
            count: 2,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Ambiguous);

    // Off the overlap each side still resolves alone.
    assert_eq!(m.resolve(&[Shape::Record, Shape::Other]).unwrap()(), "left");
    assert_eq!(m.resolve(&[Shape::Other, Shape::Mapping]).unwrap()(), "right");
}

#[test]
fn precedence_settles_an_incomparable_pair() {
    const LEFT: &[Param] = &[Param::Is(Shape::Record), Param::Any];
    const RIGHT: &[Param] = &[Param::Any, Param::Is(Shape::Mapping)];

    let mut m: Method<ProbeFn> = Method::new("probe");
    m.register(Signature::new(LEFT), left);
    m.register(Signature::with_precedence(RIGHT, 1), right);

    assert_eq!(m.resolve(&[Shape::Record, Shape::Mapping]).unwrap()(), "right");
}

#[test]
fn scalars_resolve_to_nothing() {
    for scalar in [Value::Null, Value::Bool(true), Value::Int(3), Value::Str("s".into())] {
        let err = fields(&scalar).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err,
            ReflectError::NoImplFound {
                op: "fields",
                shapes: vec![Shape::Other],
            }
        );

        assert!(get_field(&scalar, "x").is_err());
        assert!(replace(&scalar, &vmap! { "x" => 1 }).is_err());
    }
}

#[test]
fn resolution_errors_name_the_operation_and_shapes() {
    let err = replace(&Value::Int(3), &vmap! {}).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("`replace`"), "{msg}");
    assert!(msg.contains("value"), "{msg}");
}
