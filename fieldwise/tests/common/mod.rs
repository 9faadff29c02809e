#![allow(dead_code)]

use core::any::Any;
use std::sync::Arc;

use fieldwise::{
    CopyReplace, FieldDef, FieldError, FieldFlags, Kind, RecordType, RecordValue, Value,
};

/// A plain two-field record schema.
pub fn point_type() -> Arc<RecordType> {
    Arc::new(RecordType::new(
        "Point",
        vec![
            FieldDef::new("x", Kind::Float),
            FieldDef::new("y", Kind::Float),
        ],
    ))
}

pub fn point(x: f64, y: f64) -> Value {
    Value::Record(
        RecordValue::new_unconverted(point_type(), vec![x.into(), y.into()])
            .expect("arity matches schema"),
    )
}

/// A record schema whose `y` field is excluded from the textual
/// representation.
pub fn shy_point_type() -> Arc<RecordType> {
    Arc::new(RecordType::new(
        "ShyPoint",
        vec![
            FieldDef::new("x", Kind::Float),
            FieldDef::new("y", Kind::Float).flags(FieldFlags::SKIP_REPR),
        ],
    ))
}

pub fn shy_point(x: f64, y: f64) -> Value {
    Value::Record(
        RecordValue::new_unconverted(shy_point_type(), vec![x.into(), y.into()])
            .expect("arity matches schema"),
    )
}

/// A record holding two nested points, for recursive-replace tests.
pub fn pair_type() -> Arc<RecordType> {
    Arc::new(RecordType::new(
        "Pair",
        vec![
            FieldDef::new("a", Kind::Record),
            FieldDef::new("b", Kind::Record),
        ],
    ))
}

pub fn pair(a: Value, b: Value) -> Value {
    Value::Record(
        RecordValue::new_unconverted(pair_type(), vec![a, b]).expect("arity matches schema"),
    )
}

/// A third-party collaborator that only exposes member reads and a
/// copy-with-changes primitive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span {
    pub start: i64,
    pub len: i64,
}

impl CopyReplace for Span {
    fn type_name(&self) -> &'static str {
        "Span"
    }

    fn get(&self, name: &str) -> Option<Value> {
        match name {
            "start" => Some(Value::Int(self.start)),
            "len" => Some(Value::Int(self.len)),
            _ => None,
        }
    }

    fn with_changes(&self, changes: &[(String, Value)]) -> Result<Value, FieldError> {
        let mut out = *self;
        let mut unknown = Vec::new();
        for (name, value) in changes {
            match (name.as_str(), value) {
                ("start", Value::Int(i)) => out.start = *i,
                ("len", Value::Int(i)) => out.len = *i,
                (other, _) => unknown.push(other.to_owned()),
            }
        }
        if !unknown.is_empty() {
            return Err(FieldError::NoSuchFields { names: unknown });
        }
        Ok(Value::Custom(Arc::new(out)))
    }

    fn dyn_eq(&self, other: &dyn CopyReplace) -> bool {
        other
            .as_any()
            .downcast_ref::<Span>()
            .is_some_and(|o| o == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn span(start: i64, len: i64) -> Value {
    Value::Custom(Arc::new(Span { start, len }))
}
