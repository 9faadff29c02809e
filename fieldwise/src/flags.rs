//! Behavior-variant flags.
//!
//! A [`Flag`] is a call-site discriminant selecting an alternate policy for
//! any operation. [`Flag::NoFlag`] is the identity: every flag-qualified
//! operation under it equals the unqualified one. [`Flag::FilterRepr`]
//! keys on the `SKIP_REPR` field flag: hidden fields drop out of accessor
//! output, and touching one by name is a policy violation. Using
//! [`Flag::Abstract`] directly is always an error.

use fieldwise_core::{Field, Key, Map, Value};

use crate::api::{
    asdict_into, astuple_into, field_items, field_keys, field_values, fields, get_field, replace,
    replace_nested,
};
use crate::error::{LookupTarget, ReflectError};

/// A policy selector for flag-qualified operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Flag {
    /// The policy-less base; rejected by every operation.
    Abstract,
    /// The identity policy.
    NoFlag,
    /// Restrict operations to fields included in the textual
    /// representation.
    FilterRepr,
}

fn visible(field: &Field) -> bool {
    field.is_visible()
}

/// [`fields`] under a policy.
pub fn fields_with(flag: Flag, obj: &Value) -> Result<Vec<Field>, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => fields(obj),
        Flag::FilterRepr => Ok(fields(obj)?.into_iter().filter(visible).collect()),
    }
}

/// [`get_field`] under a policy.
///
/// Under [`Flag::FilterRepr`] an unknown name is still not-found, while a
/// known-but-hidden name is a distinct policy violation.
pub fn get_field_with(
    flag: Flag,
    obj: &Value,
    name: impl Into<Key>,
) -> Result<Value, ReflectError> {
    let name = name.into();
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => get_field(obj, name),
        Flag::FilterRepr => {
            let all = fields(obj)?;
            match all.iter().find(|f| f.name == name) {
                // `fields` succeeded, so the value is a record or mapping.
                None => Err(ReflectError::NoSuchField {
                    name,
                    on: match obj {
                        Value::Map(_) => LookupTarget::Mapping,
                        _ => LookupTarget::Record,
                    },
                }),
                Some(f) if !visible(f) => Err(ReflectError::HiddenField { name }),
                Some(_) => get_field(obj, name),
            }
        }
    }
}

/// [`field_keys`] under a policy.
pub fn field_keys_with(flag: Flag, obj: &Value) -> Result<Vec<Key>, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => field_keys(obj),
        Flag::FilterRepr => Ok(field_keys(obj)?
            .into_iter()
            .zip(fields(obj)?)
            .filter(|(_, f)| visible(f))
            .map(|(k, _)| k)
            .collect()),
    }
}

/// [`field_values`] under a policy.
pub fn field_values_with(flag: Flag, obj: &Value) -> Result<Vec<Value>, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => field_values(obj),
        Flag::FilterRepr => Ok(field_values(obj)?
            .into_iter()
            .zip(fields(obj)?)
            .filter(|(_, f)| visible(f))
            .map(|(v, _)| v)
            .collect()),
    }
}

/// [`field_items`] under a policy.
pub fn field_items_with(flag: Flag, obj: &Value) -> Result<Vec<(Key, Value)>, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => field_items(obj),
        Flag::FilterRepr => Ok(field_items(obj)?
            .into_iter()
            .zip(fields(obj)?)
            .filter(|(_, f)| visible(f))
            .map(|(item, _)| item)
            .collect()),
    }
}

/// [`asdict`](crate::asdict) under a policy.
pub fn asdict_with(flag: Flag, obj: &Value) -> Result<Map, ReflectError> {
    asdict_into_with(flag, obj)
}

/// [`asdict_into`] under a policy: collects the surviving pairs into any
/// `FromIterator<(Key, Value)>`.
pub fn asdict_into_with<M: FromIterator<(Key, Value)>>(
    flag: Flag,
    obj: &Value,
) -> Result<M, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => asdict_into(obj),
        Flag::FilterRepr => {
            let pairs: Vec<(Key, Value)> = asdict_into(obj)?;
            Ok(pairs
                .into_iter()
                .zip(fields(obj)?)
                .filter(|(_, f)| visible(f))
                .map(|(pair, _)| pair)
                .collect())
        }
    }
}

/// [`astuple`](crate::astuple) under a policy.
pub fn astuple_with(flag: Flag, obj: &Value) -> Result<Vec<Value>, ReflectError> {
    astuple_into_with(flag, obj)
}

/// [`astuple_into`] under a policy: collects the surviving values into any
/// `FromIterator<Value>`.
pub fn astuple_into_with<T: FromIterator<Value>>(
    flag: Flag,
    obj: &Value,
) -> Result<T, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => astuple_into(obj),
        Flag::FilterRepr => {
            let values: Vec<Value> = astuple_into(obj)?;
            Ok(values
                .into_iter()
                .zip(fields(obj)?)
                .filter(|(_, f)| visible(f))
                .map(|(v, _)| v)
                .collect())
        }
    }
}

/// Names in `changes` that refer to hidden fields, in field order.
fn hidden_targets(obj: &Value, changes: &Map) -> Result<Vec<Key>, ReflectError> {
    Ok(fields(obj)?
        .into_iter()
        .filter(|f| !visible(f) && changes.contains_key(&f.name))
        .map(|f| f.name)
        .collect())
}

/// Flat [`replace`] under a policy.
///
/// Under [`Flag::FilterRepr`], changing a hidden field is rejected with a
/// policy violation naming every offending field.
pub fn replace_with(flag: Flag, obj: &Value, changes: &Map) -> Result<Value, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => replace(obj, changes),
        Flag::FilterRepr => {
            let hidden = hidden_targets(obj, changes)?;
            if !hidden.is_empty() {
                return Err(ReflectError::HiddenFields { names: hidden });
            }
            replace(obj, changes)
        }
    }
}

/// [`replace_nested`] under a policy. The policy applies to the top-level
/// names of the change mapping; recursion below them runs unqualified.
pub fn replace_nested_with(flag: Flag, obj: &Value, spec: &Map) -> Result<Value, ReflectError> {
    match flag {
        Flag::Abstract => Err(ReflectError::AbstractFlag),
        Flag::NoFlag => replace_nested(obj, spec),
        Flag::FilterRepr => {
            let hidden = hidden_targets(obj, spec)?;
            if !hidden.is_empty() {
                return Err(ReflectError::HiddenFields { names: hidden });
            }
            replace_nested(obj, spec)
        }
    }
}
