//! Core value model for the fieldwise ecosystem.
//!
//! This crate defines the data the `fieldwise` operations work over:
//!
//! - [`Value`] — a dynamically-shaped structured value, covering scalars,
//!   insertion-ordered mappings ([`Map`]), fixed-schema records
//!   ([`RecordValue`]), third-party [`CopyReplace`] collaborators, and the
//!   [`Value::Opaque`] leaf-wrapper;
//! - [`RecordType`] / [`FieldDef`] — record schemas with per-field
//!   [`FieldFlags`] and optional [`Converter`]s;
//! - [`Field`] — the field descriptor reported by introspection;
//! - [`FieldError`] — construction and copy-with-changes failures.
//!
//! Everything here is immutable from the caller's point of view: records are
//! modified only by building a new instance through
//! [`RecordValue::with_changes`].

mod convert;
mod custom;
mod field;
mod macros;
mod record;
mod value;

pub use convert::{ConvertFn, Converter};
pub use custom::CopyReplace;
pub use field::{Field, FieldError, FieldFlags};
pub use record::{FieldDef, RecordType, RecordValue};
pub use value::{Key, Kind, Map, Value};
