//! Generic, type-directed operations over structured records and mappings.
//!
//! `fieldwise` gives application code one API — field introspection,
//! immutable replace, dict/tuple conversion, and recursive nested updates —
//! regardless of whether a value is a fixed-schema record or an open-schema
//! mapping. A dispatch substrate picks the shape-specific implementation at
//! the call site, so `replace(x, ...)` works the same whether `x` is a
//! [`Value::Record`], a [`Value::Map`], or a third-party [`CopyReplace`]
//! collaborator.
//!
//! # Flat and nested replace
//!
//! ```
//! use fieldwise::{Value, replace, replace_nested, vmap};
//!
//! let p = Value::Map(vmap! { "a" => 1, "b" => 2.0, "c" => vmap! { "aa" => 3, "bb" => 4 } });
//!
//! // Flat: overwrite named keys, no recursion.
//! let out = replace(&p, &vmap! { "a" => 5 })?;
//! assert_eq!(
//!     out,
//!     Value::Map(vmap! { "a" => 5, "b" => 2.0, "c" => vmap! { "aa" => 3, "bb" => 4 } }),
//! );
//!
//! // Nested: a mapping change value merges into the current field value.
//! let out = replace_nested(&p, &vmap! { "c" => vmap! { "aa" => 6 } })?;
//! assert_eq!(
//!     out,
//!     Value::Map(vmap! { "a" => 1, "b" => 2.0, "c" => vmap! { "aa" => 6, "bb" => 4 } }),
//! );
//! # Ok::<(), fieldwise::ReflectError>(())
//! ```
//!
//! # The leaf-wrapper
//!
//! Wrapping a change value in [`Value::opaque`] assigns it wholesale,
//! unexamined — the only way to hand a literal mapping to a nested field:
//!
//! ```
//! use fieldwise::{Value, replace_nested, vmap};
//!
//! let p = Value::Map(vmap! { "c" => vmap! { "aa" => 3 } });
//! let out = replace_nested(&p, &vmap! { "c" => Value::opaque(vmap! { "d" => 7 }) })?;
//! assert_eq!(out, Value::Map(vmap! { "c" => vmap! { "d" => 7 } }));
//! # Ok::<(), fieldwise::ReflectError>(())
//! ```
//!
//! # Flags
//!
//! Every operation has a flag-qualified form selecting an alternate policy;
//! see [`Flag`] and the `*_with` functions.
//!
//! All operations are pure and synchronous. Inputs are never mutated, and
//! concurrent callers may share them read-only.

mod api;
mod dispatch;
mod error;
mod flags;
mod shapes;

pub use api::{
    asdict, asdict_into, astuple, astuple_into, field_items, field_keys, field_values, fields,
    get_field, replace, replace_nested,
};
pub use dispatch::{Method, Param, Shape, Signature};
pub use error::{ErrorKind, LookupTarget, ReflectError};
pub use flags::{
    Flag, asdict_into_with, asdict_with, astuple_into_with, astuple_with, field_items_with,
    field_keys_with, field_values_with, fields_with, get_field_with, replace_nested_with,
    replace_with,
};

pub use fieldwise_core::{
    ConvertFn, Converter, CopyReplace, Field, FieldDef, FieldError, FieldFlags, Key, Kind, Map,
    RecordType, RecordValue, Value, vmap,
};
