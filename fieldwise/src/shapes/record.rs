//! Operations over fixed-schema records.

use fieldwise_core::{Field, Key, Map, RecordValue, Value};

use crate::dispatch::{Param, Registry, Shape, Signature};
use crate::error::{LookupTarget, ReflectError};
use crate::shapes::generic::{named_changes, resolve_changes};

const RECORD: &[Param] = &[Param::Is(Shape::Record)];
const RECORD_NESTED: &[Param] = &[Param::Is(Shape::Record), Param::Is(Shape::Mapping)];

pub(crate) fn register(reg: &mut Registry) {
    reg.fields.register(Signature::new(RECORD), record_fields);
    reg.get_field
        .register(Signature::new(RECORD), record_get_field);
    reg.asdict.register(Signature::new(RECORD), record_asdict);
    reg.astuple.register(Signature::new(RECORD), record_astuple);
    reg.replace.register(Signature::new(RECORD), record_replace);
    reg.replace_nested
        .register(Signature::new(RECORD_NESTED), record_replace_nested);
}

fn expect_record(obj: &Value) -> &RecordValue {
    match obj {
        Value::Record(r) => r,
        _ => unreachable!("dispatched on record shape"),
    }
}

/// The record's declared field descriptors, in schema order.
fn record_fields(obj: &Value) -> Result<Vec<Field>, ReflectError> {
    let record = expect_record(obj);
    Ok(record
        .ty()
        .fields()
        .iter()
        .map(|def| Field {
            name: Key::Str(def.name.clone()),
            kind: def.kind,
            flags: def.flags,
        })
        .collect())
}

fn record_get_field(obj: &Value, name: &Key) -> Result<Value, ReflectError> {
    let record = expect_record(obj);
    name.as_str()
        .and_then(|s| record.get(s))
        .cloned()
        .ok_or_else(|| ReflectError::NoSuchField {
            name: name.clone(),
            on: LookupTarget::Record,
        })
}

fn record_asdict(obj: &Value) -> Result<Vec<(Key, Value)>, ReflectError> {
    let record = expect_record(obj);
    Ok(record
        .ty()
        .fields()
        .iter()
        .zip(record.values())
        .map(|(def, value)| (Key::Str(def.name.clone()), value.clone()))
        .collect())
}

fn record_astuple(obj: &Value) -> Result<Vec<Value>, ReflectError> {
    Ok(expect_record(obj).values().to_vec())
}

/// Flat replace: delegate to the schema's copy-with-changes primitive.
/// Unknown field names are its error to raise.
fn record_replace(obj: &Value, changes: &Map) -> Result<Value, ReflectError> {
    let record = expect_record(obj);
    let out = record.with_changes(&named_changes(changes))?;
    Ok(Value::Record(out))
}

fn record_replace_nested(obj: &Value, spec: &Map) -> Result<Value, ReflectError> {
    let resolved = resolve_changes(obj, spec)?;
    record_replace(obj, &resolved)
}
