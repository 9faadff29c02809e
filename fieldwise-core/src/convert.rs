//! Field converters.
//!
//! A converter normalizes a raw constructor argument before it is stored in
//! a record field. Conversion runs when a record is built through the
//! converting entry point and again whenever a converted field is changed
//! through the copy-with-changes primitive; the non-converting entry point
//! skips it entirely.

use crate::field::FieldError;
use crate::value::{Kind, Value};

/// A conversion function. Takes the raw value and returns the value to
/// store, or a message describing why the raw value is unacceptable.
pub type ConvertFn = fn(Value) -> Result<Value, String>;

/// A policy around a [`ConvertFn`] deciding when it applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Converter {
    /// Apply the conversion to every value.
    Always(ConvertFn),

    /// Pass [`Value::Null`] through untouched, convert everything else.
    Optional(ConvertFn),

    /// Pass values of the listed kinds through untouched, convert everything
    /// else.
    Unless {
        /// Kinds that skip conversion.
        keep: &'static [Kind],
        /// The conversion applied to all other kinds.
        apply: ConvertFn,
    },
}

impl Converter {
    /// Runs the converter policy on `value` for the named field.
    pub fn apply(&self, field: &str, value: Value) -> Result<Value, FieldError> {
        let run = |f: ConvertFn, v: Value| {
            f(v).map_err(|message| FieldError::ConversionFailed {
                field: field.to_owned(),
                message,
            })
        };

        match self {
            Converter::Always(f) => run(*f, value),
            Converter::Optional(f) => match value {
                Value::Null => Ok(Value::Null),
                other => run(*f, other),
            },
            Converter::Unless { keep, apply } => {
                if keep.contains(&value.kind()) {
                    Ok(value)
                } else {
                    run(*apply, value)
                }
            }
        }
    }
}
