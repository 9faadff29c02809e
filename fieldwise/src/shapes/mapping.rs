//! Operations over open-schema mappings.
//!
//! Mappings have no declared schema; `fields` synthesizes one descriptor
//! per key on demand, typed by the runtime kind of the current value.

use fieldwise_core::{Field, FieldFlags, Key, Map, Value};

use crate::dispatch::{Param, Registry, Shape, Signature};
use crate::error::{LookupTarget, ReflectError};
use crate::shapes::generic::resolve_changes;

const MAPPING: &[Param] = &[Param::Is(Shape::Mapping)];
const MAPPING_NESTED: &[Param] = &[Param::Is(Shape::Mapping), Param::Is(Shape::Mapping)];

pub(crate) fn register(reg: &mut Registry) {
    reg.fields.register(Signature::new(MAPPING), mapping_fields);
    // Outranks any future generic fallback for member reads.
    reg.get_field
        .register(Signature::with_precedence(MAPPING, 1), mapping_get_field);
    reg.field_keys
        .register(Signature::new(MAPPING), mapping_field_keys);
    reg.field_values
        .register(Signature::new(MAPPING), mapping_field_values);
    reg.field_items
        .register(Signature::new(MAPPING), mapping_field_items);
    reg.asdict.register(Signature::new(MAPPING), mapping_asdict);
    reg.astuple
        .register(Signature::new(MAPPING), mapping_astuple);
    reg.replace
        .register(Signature::new(MAPPING), mapping_replace);
    reg.replace_nested
        .register(Signature::new(MAPPING_NESTED), mapping_replace_nested);
}

fn expect_mapping(obj: &Value) -> &Map {
    match obj {
        Value::Map(m) => m,
        _ => unreachable!("dispatched on mapping shape"),
    }
}

/// One synthesized descriptor per key, in iteration order, typed by the
/// runtime kind of the current value.
fn mapping_fields(obj: &Value) -> Result<Vec<Field>, ReflectError> {
    Ok(expect_mapping(obj)
        .iter()
        .map(|(key, value)| Field {
            name: key.clone(),
            kind: value.kind(),
            flags: FieldFlags::EMPTY,
        })
        .collect())
}

fn mapping_get_field(obj: &Value, name: &Key) -> Result<Value, ReflectError> {
    expect_mapping(obj)
        .get(name)
        .cloned()
        .ok_or_else(|| ReflectError::NoSuchField {
            name: name.clone(),
            on: LookupTarget::Mapping,
        })
}

fn mapping_field_keys(obj: &Value) -> Result<Vec<Key>, ReflectError> {
    Ok(expect_mapping(obj).keys().cloned().collect())
}

fn mapping_field_values(obj: &Value) -> Result<Vec<Value>, ReflectError> {
    Ok(expect_mapping(obj).values().cloned().collect())
}

fn mapping_field_items(obj: &Value) -> Result<Vec<(Key, Value)>, ReflectError> {
    Ok(expect_mapping(obj)
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect())
}

/// Always a fresh container, never the input itself.
fn mapping_asdict(obj: &Value) -> Result<Vec<(Key, Value)>, ReflectError> {
    mapping_field_items(obj)
}

fn mapping_astuple(obj: &Value) -> Result<Vec<Value>, ReflectError> {
    mapping_field_values(obj)
}

/// Flat replace. Every change key must already exist in the mapping;
/// offenders are collected and reported together.
fn mapping_replace(obj: &Value, changes: &Map) -> Result<Value, ReflectError> {
    let map = expect_mapping(obj);

    let invalid: Vec<Key> = changes
        .keys()
        .filter(|key| !map.contains_key(*key))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(ReflectError::InvalidKeys { keys: invalid });
    }

    let mut out = map.clone();
    for (key, value) in changes {
        // Overwrites in place; original insertion order is kept.
        out.insert(key.clone(), value.clone());
    }
    Ok(Value::Map(out))
}

fn mapping_replace_nested(obj: &Value, spec: &Map) -> Result<Value, ReflectError> {
    let resolved = resolve_changes(obj, spec)?;
    mapping_replace(obj, &resolved)
}
