//! Generic fallback implementations, defined in terms of `fields` and
//! `get_field`, plus the change-resolution helper shared by every
//! `replace` implementation.

use fieldwise_core::{Key, Map, Value};

use crate::api::{fields, get_field, replace_nested};
use crate::dispatch::{Param, Registry, Signature};
use crate::error::ReflectError;

const ANY: &[Param] = &[Param::Any];

pub(crate) fn register(reg: &mut Registry) {
    reg.field_keys.register(Signature::new(ANY), generic_field_keys);
    reg.field_values
        .register(Signature::new(ANY), generic_field_values);
    reg.field_items
        .register(Signature::new(ANY), generic_field_items);
}

/// Field names, from whatever `fields` reports for the value. Shapes with
/// no `fields` implementation propagate its resolution failure.
fn generic_field_keys(obj: &Value) -> Result<Vec<Key>, ReflectError> {
    Ok(fields(obj)?.into_iter().map(|f| f.name).collect())
}

fn generic_field_values(obj: &Value) -> Result<Vec<Value>, ReflectError> {
    fields(obj)?
        .into_iter()
        .map(|f| get_field(obj, f.name))
        .collect()
}

fn generic_field_items(obj: &Value) -> Result<Vec<(Key, Value)>, ReflectError> {
    fields(obj)?
        .into_iter()
        .map(|f| {
            let value = get_field(obj, f.name.clone())?;
            Ok((f.name, value))
        })
        .collect()
}

/// Resolves a nested-changes specification into flat replacements.
///
/// Per entry: a leaf-wrapper is unwrapped and stored verbatim with no
/// recursion; a mapping recurses into the current field value (failing with
/// the dispatch substrate's not-found error when that value is not
/// replace-capable); anything else is taken verbatim.
pub(crate) fn resolve_changes(obj: &Value, spec: &Map) -> Result<Map, ReflectError> {
    let mut out = Map::with_capacity(spec.len());
    for (key, change) in spec {
        let resolved = match change {
            Value::Opaque(inner) => (**inner).clone(),
            Value::Map(sub) => {
                let current = get_field(obj, key.clone())?;
                replace_nested(&current, sub)?
            }
            other => other.clone(),
        };
        out.insert(key.clone(), resolved);
    }
    Ok(out)
}

/// Lowers mapping-style changes into the name/value pairs the record and
/// collaborator copy-with-changes primitives take. Non-string keys keep
/// their display form and fall out as unknown names there.
pub(crate) fn named_changes(changes: &Map) -> Vec<(String, Value)> {
    changes
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
