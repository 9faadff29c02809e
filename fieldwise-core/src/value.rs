use std::sync::Arc;

use indexmap::IndexMap;

use crate::custom::CopyReplace;
use crate::record::RecordValue;

/// The open-schema mapping representation: an insertion-ordered key/value
/// container. Iteration order follows insertion order, but no operation in
/// this crate family promises anything about it to callers.
pub type Map = IndexMap<Key, Value>;

/// A hashable mapping key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Key {
    /// A string key (also the form record field names take).
    Str(String),
    /// An integer key.
    Int(i64),
    /// A boolean key.
    Bool(bool),
}

impl Key {
    /// Returns the string form of this key, if it is one.
    ///
    /// Record fields are addressed by name, so only `Str` keys can ever
    /// resolve against a record schema.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl core::fmt::Display for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{s}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

/// The runtime category of a [`Value`].
///
/// `Kind` doubles as the "declared type" of record fields and as the
/// synthesized type of mapping entries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    /// The null value.
    Null,
    /// A boolean.
    Bool,
    /// A signed integer.
    Int,
    /// A floating-point number.
    Float,
    /// A string.
    Str,
    /// A leaf-wrapped value.
    Opaque,
    /// An open-schema mapping.
    Map,
    /// A fixed-schema record.
    Record,
    /// A third-party copy-replace collaborator.
    Custom,
    /// Any kind; used as a declared field type when nothing narrower applies.
    Any,
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::Opaque => "opaque",
            Kind::Map => "mapping",
            Kind::Record => "record",
            Kind::Custom => "custom",
            Kind::Any => "any",
        };
        write!(f, "{name}")
    }
}

/// A dynamically-shaped structured value.
///
/// Two of the variants are the structured shapes this crate family revolves
/// around: [`Value::Record`] (fixed schema, named typed fields) and
/// [`Value::Map`] (open schema, hashable keys). [`Value::Custom`] carries a
/// third-party collaborator that exposes its own copy-with-changes
/// primitive. Everything else is a scalar leaf.
///
/// [`Value::Opaque`] is the leaf-wrapper: the replace engine unwraps it and
/// stores the contents verbatim, performing no recursion even when the
/// contents are themselves a mapping. It is the only way to assign a literal
/// mapping to a nested field.
#[derive(Clone, Debug)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    Str(String),
    /// A leaf-wrapped value; suppresses recursive merge semantics.
    Opaque(Box<Value>),
    /// An open-schema mapping.
    Map(Map),
    /// A fixed-schema record instance.
    Record(RecordValue),
    /// A third-party copy-replace collaborator.
    Custom(Arc<dyn CopyReplace>),
}

impl Value {
    /// Wraps a value so the replace engine treats it as an opaque terminal.
    pub fn opaque(value: impl Into<Value>) -> Self {
        Value::Opaque(Box::new(value.into()))
    }

    /// Returns the runtime [`Kind`] of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Opaque(_) => Kind::Opaque,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
            Value::Custom(_) => Kind::Custom,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Two wrappers are equal iff their contents are equal.
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.dyn_eq(b.as_ref()),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<RecordValue> for Value {
    fn from(r: RecordValue) -> Self {
        Value::Record(r)
    }
}
