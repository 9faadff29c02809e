//! The shape-agnostic operation surface.
//!
//! Every function here resolves the shape-specific implementation through
//! the dispatch substrate and calls it. All operations are pure: inputs are
//! never mutated, and anything "changed" comes back as a new value.

use fieldwise_core::{Field, Key, Map, Value};

use crate::dispatch::{Shape, registry};
use crate::error::ReflectError;

/// Returns the ordered field descriptors of a structured value.
///
/// Records report their declared schema; mappings synthesize one
/// descriptor per key, typed by the runtime kind of the current value.
///
/// ```
/// use fieldwise::{Kind, Value, fields, vmap};
///
/// let p = Value::Map(vmap! { "a" => 1, "b" => 2.0 });
/// let fs = fields(&p)?;
/// assert_eq!(fs.len(), 2);
/// assert_eq!(fs[0].kind, Kind::Int);
/// # Ok::<(), fieldwise::ReflectError>(())
/// ```
pub fn fields(obj: &Value) -> Result<Vec<Field>, ReflectError> {
    registry().fields.resolve(&[Shape::of(obj)])?(obj)
}

/// Reads one field of a structured value by name.
///
/// Fails with a not-found error when the name does not exist.
pub fn get_field(obj: &Value, name: impl Into<Key>) -> Result<Value, ReflectError> {
    let name = name.into();
    registry().get_field.resolve(&[Shape::of(obj)])?(obj, &name)
}

/// The field names, in the same order as [`fields`].
pub fn field_keys(obj: &Value) -> Result<Vec<Key>, ReflectError> {
    registry().field_keys.resolve(&[Shape::of(obj)])?(obj)
}

/// The field values, in the same order as [`fields`].
pub fn field_values(obj: &Value) -> Result<Vec<Value>, ReflectError> {
    registry().field_values.resolve(&[Shape::of(obj)])?(obj)
}

/// The (name, value) pairs, in the same order as [`fields`].
pub fn field_items(obj: &Value) -> Result<Vec<(Key, Value)>, ReflectError> {
    registry().field_items.resolve(&[Shape::of(obj)])?(obj)
}

/// Returns the fields of a structured value as a fresh [`Map`].
///
/// The result is always a new container, even when the input is already a
/// mapping.
pub fn asdict(obj: &Value) -> Result<Map, ReflectError> {
    asdict_into(obj)
}

/// [`asdict`] with an injectable output container: collects into any
/// `FromIterator<(Key, Value)>`.
pub fn asdict_into<M: FromIterator<(Key, Value)>>(obj: &Value) -> Result<M, ReflectError> {
    let pairs = registry().asdict.resolve(&[Shape::of(obj)])?(obj)?;
    Ok(pairs.into_iter().collect())
}

/// Returns the field values of a structured value as a sequence, in field
/// order.
pub fn astuple(obj: &Value) -> Result<Vec<Value>, ReflectError> {
    astuple_into(obj)
}

/// [`astuple`] with an injectable output container: collects into any
/// `FromIterator<Value>`.
pub fn astuple_into<T: FromIterator<Value>>(obj: &Value) -> Result<T, ReflectError> {
    let values = registry().astuple.resolve(&[Shape::of(obj)])?(obj)?;
    Ok(values.into_iter().collect())
}

/// Flat replace: produces a new value with the named fields overwritten.
///
/// Change values are applied verbatim, mappings included; no recursion
/// happens here. Records reject unknown names through their
/// copy-with-changes primitive; mappings reject them with an invalid-keys
/// error naming every offender.
///
/// ```
/// use fieldwise::{Value, replace, vmap};
///
/// let p = Value::Map(vmap! { "a" => 1, "b" => 2 });
/// let out = replace(&p, &vmap! { "b" => 4.0 })?;
/// assert_eq!(out, Value::Map(vmap! { "a" => 1, "b" => 4.0 }));
/// # Ok::<(), fieldwise::ReflectError>(())
/// ```
pub fn replace(obj: &Value, changes: &Map) -> Result<Value, ReflectError> {
    registry().replace.resolve(&[Shape::of(obj)])?(obj, changes)
}

/// Recursive replace driven by a nested-changes specification.
///
/// Each entry's value is interpreted by shape: a [`Value::Opaque`] wrapper
/// is unwrapped and assigned wholesale, a mapping recurses into the current
/// field value, and anything else is assigned verbatim. Recursing into a
/// value that is not itself replace-capable fails with the dispatch
/// substrate's not-found error.
///
/// ```
/// use fieldwise::{Value, replace_nested, vmap};
///
/// let p = Value::Map(vmap! { "a" => 1, "c" => vmap! { "aa" => 3, "bb" => 4 } });
/// let out = replace_nested(&p, &vmap! { "c" => vmap! { "aa" => 6 } })?;
/// assert_eq!(
///     out,
///     Value::Map(vmap! { "a" => 1, "c" => vmap! { "aa" => 6, "bb" => 4 } }),
/// );
/// # Ok::<(), fieldwise::ReflectError>(())
/// ```
pub fn replace_nested(obj: &Value, spec: &Map) -> Result<Value, ReflectError> {
    registry()
        .replace_nested
        .resolve(&[Shape::of(obj), Shape::Mapping])?(obj, spec)
}
