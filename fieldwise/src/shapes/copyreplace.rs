//! Operations over third-party copy-replace collaborators.
//!
//! Collaborators expose member reads and a copy-with-changes primitive, and
//! that is all these implementations lean on. Deliberately no `fields`
//! registration: a collaborator's schema is not ours to enumerate, so
//! `fields` on one resolves to not-found.

use fieldwise_core::{CopyReplace, Key, Map, Value};

use crate::dispatch::{Param, Registry, Shape, Signature};
use crate::error::{LookupTarget, ReflectError};
use crate::shapes::generic::{named_changes, resolve_changes};

const CUSTOM: &[Param] = &[Param::Is(Shape::CopyReplace)];
const CUSTOM_NESTED: &[Param] = &[Param::Is(Shape::CopyReplace), Param::Is(Shape::Mapping)];

pub(crate) fn register(reg: &mut Registry) {
    reg.get_field
        .register(Signature::new(CUSTOM), custom_get_field);
    reg.replace.register(Signature::new(CUSTOM), custom_replace);
    reg.replace_nested
        .register(Signature::new(CUSTOM_NESTED), custom_replace_nested);
}

fn expect_custom(obj: &Value) -> &dyn CopyReplace {
    match obj {
        Value::Custom(c) => c.as_ref(),
        _ => unreachable!("dispatched on copy-replace shape"),
    }
}

fn custom_get_field(obj: &Value, name: &Key) -> Result<Value, ReflectError> {
    let custom = expect_custom(obj);
    name.as_str()
        .and_then(|s| custom.get(s))
        .ok_or_else(|| ReflectError::NoSuchField {
            name: name.clone(),
            on: LookupTarget::Custom(custom.type_name()),
        })
}

fn custom_replace(obj: &Value, changes: &Map) -> Result<Value, ReflectError> {
    let custom = expect_custom(obj);
    Ok(custom.with_changes(&named_changes(changes))?)
}

fn custom_replace_nested(obj: &Value, spec: &Map) -> Result<Value, ReflectError> {
    let resolved = resolve_changes(obj, spec)?;
    custom_replace(obj, &resolved)
}
