//! The dispatch substrate: shape resolution over a registered-signature
//! table.
//!
//! Every operation is a family of implementations keyed by the runtime
//! shapes of its arguments. Resolution walks the registered signatures,
//! keeps the matches, and picks the most specific one: higher precedence
//! wins outright, and at equal precedence an exact shape beats the `Any`
//! wildcard position by position. Two matches with no specificity order
//! between them are an error, never a silent pick. The table is built once
//! and is read-only afterwards.

use std::sync::OnceLock;

use core::cmp::Ordering;

use fieldwise_core::{Field, Key, Map, Value};
use log::trace;

use crate::error::ReflectError;
use crate::shapes;

/// The dispatch-relevant runtime category of a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Shape {
    /// A fixed-schema record.
    Record,
    /// An open-schema mapping.
    Mapping,
    /// A collaborator exposing its own copy-with-changes primitive.
    CopyReplace,
    /// Anything else: a scalar or otherwise unstructured value.
    Other,
}

impl Shape {
    /// Returns the concrete shape of a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Record(_) => Shape::Record,
            Value::Map(_) => Shape::Mapping,
            Value::Custom(_) => Shape::CopyReplace,
            _ => Shape::Other,
        }
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Shape::Record => "record",
            Shape::Mapping => "mapping",
            Shape::CopyReplace => "copy-replace",
            Shape::Other => "value",
        };
        write!(f, "{name}")
    }
}

/// One parameter position in an implementation signature.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Param {
    /// Matches exactly one shape.
    Is(Shape),
    /// Matches any shape; strictly less specific than [`Param::Is`].
    Any,
}

impl Param {
    fn matches(self, shape: Shape) -> bool {
        match self {
            Param::Is(s) => s == shape,
            Param::Any => true,
        }
    }
}

/// An implementation signature: one [`Param`] per dispatched argument, plus
/// an explicit precedence that overrides positional specificity when set.
#[derive(Clone, Copy, Debug)]
pub struct Signature {
    params: &'static [Param],
    precedence: i8,
}

impl Signature {
    /// A signature at the default precedence.
    pub const fn new(params: &'static [Param]) -> Self {
        Self {
            params,
            precedence: 0,
        }
    }

    /// A signature with an explicit precedence.
    pub const fn with_precedence(params: &'static [Param], precedence: i8) -> Self {
        Self { params, precedence }
    }

    fn matches(&self, shapes: &[Shape]) -> bool {
        self.params.len() == shapes.len()
            && self
                .params
                .iter()
                .zip(shapes)
                .all(|(param, shape)| param.matches(*shape))
    }

    /// Partial specificity order between two signatures of the same arity.
    /// `None` means incomparable: more specific in one position, less in
    /// another.
    fn specificity(&self, other: &Self) -> Option<Ordering> {
        match self.precedence.cmp(&other.precedence) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }

        let mut acc = Ordering::Equal;
        for (a, b) in self.params.iter().zip(other.params) {
            let step = match (a, b) {
                (Param::Is(_), Param::Any) => Ordering::Greater,
                (Param::Any, Param::Is(_)) => Ordering::Less,
                _ => Ordering::Equal,
            };
            acc = match (acc, step) {
                (Ordering::Equal, s) => s,
                (a, Ordering::Equal) => a,
                (a, s) if a == s => a,
                _ => return None,
            };
        }
        Some(acc)
    }
}

/// A family of implementations of one operation, resolved by argument
/// shape.
pub struct Method<F> {
    name: &'static str,
    impls: Vec<(Signature, F)>,
}

impl<F: Copy> Method<F> {
    /// Creates an empty method. `name` is what resolution errors report.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            impls: Vec::new(),
        }
    }

    /// Registers an implementation for a signature.
    pub fn register(&mut self, signature: Signature, func: F) {
        self.impls.push((signature, func));
    }

    /// Resolves the implementation for the given argument shapes.
    pub fn resolve(&self, shapes: &[Shape]) -> Result<F, ReflectError> {
        trace!("resolving `{}` for shapes {:?}", self.name, shapes);

        let matched: Vec<&(Signature, F)> = self
            .impls
            .iter()
            .filter(|(sig, _)| sig.matches(shapes))
            .collect();

        if matched.is_empty() {
            return Err(ReflectError::NoImplFound {
                op: self.name,
                shapes: shapes.to_vec(),
            });
        }

        // Keep the maxima: implementations no other match is strictly more
        // specific than.
        let maxima: Vec<&(Signature, F)> = matched
            .iter()
            .enumerate()
            .filter(|(i, (sig, _))| {
                !matched.iter().enumerate().any(|(j, (other, _))| {
                    j != *i && other.specificity(sig) == Some(Ordering::Greater)
                })
            })
            .map(|(_, entry)| *entry)
            .collect();

        match maxima.as_slice() {
            [(_, func)] => Ok(*func),
            ties => Err(ReflectError::AmbiguousImpl {
                op: self.name,
                shapes: shapes.to_vec(),
                count: ties.len(),
            }),
        }
    }
}

pub(crate) type FieldsFn = fn(&Value) -> Result<Vec<Field>, ReflectError>;
pub(crate) type GetFieldFn = fn(&Value, &Key) -> Result<Value, ReflectError>;
pub(crate) type KeysFn = fn(&Value) -> Result<Vec<Key>, ReflectError>;
pub(crate) type ValuesFn = fn(&Value) -> Result<Vec<Value>, ReflectError>;
pub(crate) type ItemsFn = fn(&Value) -> Result<Vec<(Key, Value)>, ReflectError>;
pub(crate) type ReplaceFn = fn(&Value, &Map) -> Result<Value, ReflectError>;

/// The process-wide implementation table, one [`Method`] per operation.
pub(crate) struct Registry {
    pub(crate) fields: Method<FieldsFn>,
    pub(crate) get_field: Method<GetFieldFn>,
    pub(crate) field_keys: Method<KeysFn>,
    pub(crate) field_values: Method<ValuesFn>,
    pub(crate) field_items: Method<ItemsFn>,
    pub(crate) asdict: Method<ItemsFn>,
    pub(crate) astuple: Method<ValuesFn>,
    pub(crate) replace: Method<ReplaceFn>,
    pub(crate) replace_nested: Method<ReplaceFn>,
}

impl Registry {
    fn new() -> Self {
        Self {
            fields: Method::new("fields"),
            get_field: Method::new("get_field"),
            field_keys: Method::new("field_keys"),
            field_values: Method::new("field_values"),
            field_items: Method::new("field_items"),
            asdict: Method::new("asdict"),
            astuple: Method::new("astuple"),
            // Both entry points present as `replace` in diagnostics; the
            // nested form dispatches on (obj, changes) while the flat form
            // dispatches on obj alone.
            replace: Method::new("replace"),
            replace_nested: Method::new("replace"),
        }
    }
}

/// Returns the registry, building it on first use. Each shape module
/// registers its implementations before any operation can resolve; the
/// `OnceLock` serializes initialization, and the table is read-only after.
pub(crate) fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut reg = Registry::new();
        shapes::record::register(&mut reg);
        shapes::mapping::register(&mut reg);
        shapes::copyreplace::register(&mut reg);
        shapes::generic::register(&mut reg);
        reg
    })
}
