mod common;

use common::{pair, point, span};
use fieldwise::{ErrorKind, Key, Map, ReflectError, Value, get_field, replace, replace_nested, vmap};

fn sample() -> Value {
    Value::Map(vmap! { "a" => 1, "b" => 2.0, "c" => vmap! { "aa" => 3, "bb" => 4 } })
}

#[test]
fn flat_replace_overwrites_mapping_keys() -> eyre::Result<()> {
    let p = Value::Map(vmap! { "a" => 1, "b" => 2, "c" => 3 });
    let out = replace(&p, &vmap! { "c" => 4.0 })?;
    assert_eq!(out, Value::Map(vmap! { "a" => 1, "b" => 2, "c" => 4.0 }));
    // Input untouched.
    assert_eq!(p, Value::Map(vmap! { "a" => 1, "b" => 2, "c" => 3 }));
    Ok(())
}

#[test]
fn flat_replace_rejects_unknown_keys_all_at_once() {
    let p = Value::Map(vmap! { "a" => 1, "b" => 2, "c" => 3 });
    let err = replace(&p, &vmap! { "d" => 5, "b" => 0, "e" => 6 }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err,
        ReflectError::InvalidKeys {
            keys: vec![Key::from("d"), Key::from("e")],
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("'d'") && msg.contains("'e'"), "message: {msg}");
}

#[test]
fn flat_replace_on_a_record_goes_through_copy_with_changes() -> eyre::Result<()> {
    let p = point(1.0, 2.0);
    let out = replace(&p, &vmap! { "x" => 3.0 })?;
    assert_eq!(out, point(3.0, 2.0));
    assert_eq!(p, point(1.0, 2.0));
    Ok(())
}

#[test]
fn record_replace_propagates_unknown_field_names() {
    let err = replace(&point(1.0, 2.0), &vmap! { "z" => 0.0 }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("'z'"));
}

#[test]
fn empty_replace_yields_an_equal_value() -> eyre::Result<()> {
    for obj in [sample(), point(1.0, 2.0), span(0, 5)] {
        assert_eq!(replace(&obj, &Map::new())?, obj);
        assert_eq!(replace_nested(&obj, &Map::new())?, obj);
    }
    Ok(())
}

#[test]
fn flat_replace_is_idempotent() -> eyre::Result<()> {
    let changes = vmap! { "b" => 9.5 };
    let once = replace(&sample(), &changes)?;
    let twice = replace(&once, &changes)?;
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn flat_replace_does_not_recurse_into_mapping_values() -> eyre::Result<()> {
    // A mapping change value replaces the key wholesale under flat replace.
    let out = replace(&sample(), &vmap! { "c" => vmap! { "zz" => 0 } })?;
    assert_eq!(get_field(&out, "c")?, Value::Map(vmap! { "zz" => 0 }));
    Ok(())
}

#[test]
fn nested_replace_merges_into_the_current_value() -> eyre::Result<()> {
    let out = replace_nested(&sample(), &vmap! { "c" => vmap! { "aa" => 6 } })?;
    assert_eq!(
        out,
        Value::Map(vmap! { "a" => 1, "b" => 2.0, "c" => vmap! { "aa" => 6, "bb" => 4 } }),
    );
    Ok(())
}

#[test]
fn opaque_wrapper_stops_recursion() -> eyre::Result<()> {
    let wholesale = vmap! { "aa" => 6, "bb" => vmap! { "d" => 7 } };
    let out = replace_nested(&sample(), &vmap! { "c" => Value::opaque(wholesale.clone()) })?;
    assert_eq!(
        out,
        Value::Map(vmap! { "a" => 1, "b" => 2.0, "c" => wholesale }),
    );
    Ok(())
}

#[test]
fn merging_into_a_scalar_is_a_dispatch_not_found() {
    // "bb" holds 4; there is no replace implementation for (value, mapping).
    let err = replace_nested(
        &sample(),
        &vmap! { "c" => vmap! { "aa" => 6, "bb" => vmap! { "d" => 7 } } },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let msg = err.to_string();
    assert!(msg.contains("replace"), "message: {msg}");
}

#[test]
fn nested_replace_recurses_through_records() -> eyre::Result<()> {
    let p = pair(point(1.0, 2.0), point(3.0, 4.0));
    let out = replace_nested(
        &p,
        &vmap! { "a" => vmap! { "x" => 5.0 }, "b" => vmap! { "y" => 6.0 } },
    )?;
    assert_eq!(out, pair(point(5.0, 2.0), point(3.0, 6.0)));
    Ok(())
}

#[test]
fn nested_replace_crosses_mixed_structures() -> eyre::Result<()> {
    // A mapping of records.
    let p = Value::Map(vmap! { "a" => point(1.0, 2.0), "b" => point(3.0, 4.0) });
    let out = replace_nested(
        &p,
        &vmap! { "a" => vmap! { "x" => 5.0 }, "b" => vmap! { "y" => 6.0 } },
    )?;
    assert_eq!(
        out,
        Value::Map(vmap! { "a" => point(5.0, 2.0), "b" => point(3.0, 6.0) }),
    );

    // A record field replaced with an unwrapped literal mapping.
    let p = pair(point(1.0, 2.0), point(3.0, 4.0));
    let out = replace_nested(
        &p,
        &vmap! { "a" => vmap! { "x" => Value::opaque(vmap! { "thing" => 5.0 }) } },
    )?;
    assert_eq!(
        get_field(&get_field(&out, "a")?, "x")?,
        Value::Map(vmap! { "thing" => 5.0 }),
    );
    Ok(())
}

#[test]
fn replace_works_on_copy_replace_collaborators() -> eyre::Result<()> {
    let s = span(3, 10);
    assert_eq!(replace(&s, &vmap! { "start" => 4 })?, span(4, 10));

    // Nested: a mapping of collaborators.
    let m = Value::Map(vmap! { "head" => span(0, 2), "tail" => span(8, 3) });
    let out = replace_nested(&m, &vmap! { "tail" => vmap! { "len" => 5 } })?;
    assert_eq!(
        out,
        Value::Map(vmap! { "head" => span(0, 2), "tail" => span(8, 5) }),
    );
    Ok(())
}

#[test]
fn collaborator_unknown_members_propagate() {
    let err = replace(&span(0, 1), &vmap! { "width" => 2 }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("'width'"));
}

#[test]
fn nested_replace_key_missing_from_object_fails_in_flat_step() {
    // "d" is resolvable as a change (it is a direct value) but the flat
    // step rejects it as an unknown key.
    let err = replace_nested(&sample(), &vmap! { "d" => 1 }).unwrap_err();
    assert_eq!(
        err,
        ReflectError::InvalidKeys {
            keys: vec![Key::from("d")],
        }
    );
}
