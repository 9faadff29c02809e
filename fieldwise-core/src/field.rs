use bitflags::bitflags;

use crate::value::{Key, Kind};

bitflags! {
    /// Flags that qualify a field's behavior.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct FieldFlags: u64 {
        /// No flags.
        const EMPTY = 0;

        /// Flag indicating that the field is excluded from the textual
        /// representation. Policy-qualified operations treat such a field
        /// as invisible.
        const SKIP_REPR = 1 << 0;
    }
}

impl Default for FieldFlags {
    #[inline(always)]
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Describes one field of a structured value, as reported by the `fields`
/// operation.
///
/// For records these come straight from the schema; for mappings one is
/// synthesized per key, with `kind` set to the runtime kind of the current
/// value and empty flags.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Field {
    /// The field name (for records, always a string key).
    pub name: Key,

    /// The declared kind for record fields; the runtime kind of the current
    /// value for mapping entries.
    pub kind: Kind,

    /// Flags qualifying the field's behavior.
    pub flags: FieldFlags,
}

impl Field {
    /// True if the field participates in the textual representation.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.flags.contains(FieldFlags::SKIP_REPR)
    }
}

/// Errors encountered when constructing a record or producing a modified
/// copy of one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FieldError {
    /// A set of changes named fields that do not exist on the schema. All
    /// offending names are collected before the error is raised.
    NoSuchFields {
        /// Every unknown name, in the order encountered.
        names: Vec<String>,
    },

    /// A record was constructed with the wrong number of positional values.
    ArityMismatch {
        /// The number of fields the schema declares.
        expected: usize,
        /// The number of values supplied.
        got: usize,
    },

    /// A field converter rejected the supplied value.
    ConversionFailed {
        /// The field whose converter failed.
        field: String,
        /// The converter's own message.
        message: String,
    },
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::NoSuchFields { names } => {
                write!(f, "no such fields {{")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{name}'")?;
                }
                write!(f, "}}")
            }
            FieldError::ArityMismatch { expected, got } => {
                write!(f, "expected {expected} field values, got {got}")
            }
            FieldError::ConversionFailed { field, message } => {
                write!(f, "conversion failed for field '{field}': {message}")
            }
        }
    }
}

impl core::error::Error for FieldError {}
