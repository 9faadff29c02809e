use fieldwise_core::{FieldError, Key};

use crate::dispatch::Shape;

/// What a failed by-name field lookup ran against.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LookupTarget {
    /// A fixed-schema record.
    Record,
    /// An open-schema mapping.
    Mapping,
    /// A collaborator, identified by its reported type name.
    Custom(&'static str),
}

/// The coarse category an error falls under. Callers that only care
/// about the category match on this instead of on individual variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// No implementation matched, or a named field/key does not exist.
    NotFound,
    /// Two or more equally-specific implementations matched.
    Ambiguous,
    /// The arguments themselves are unacceptable.
    InvalidArgument,
    /// A flag-qualified operation rejected an action the base operation
    /// would allow.
    PolicyViolation,
}

/// Errors produced by the fieldwise operations.
#[derive(Clone, PartialEq)]
pub enum ReflectError {
    /// Dispatch found no implementation for the given argument shapes.
    NoImplFound {
        /// The operation being resolved.
        op: &'static str,
        /// The runtime shapes of the arguments.
        shapes: Vec<Shape>,
    },

    /// Dispatch found two or more implementations of equal specificity.
    AmbiguousImpl {
        /// The operation being resolved.
        op: &'static str,
        /// The runtime shapes of the arguments.
        shapes: Vec<Shape>,
        /// How many implementations tied.
        count: usize,
    },

    /// A named field or key does not exist on the value.
    NoSuchField {
        /// The missing name.
        name: Key,
        /// What the lookup ran against.
        on: LookupTarget,
    },

    /// A flat replace on a mapping named keys the mapping does not have.
    /// All offending keys are listed, not just the first.
    InvalidKeys {
        /// Every unknown key, in the order encountered.
        keys: Vec<Key>,
    },

    /// The abstract flag was used directly instead of a concrete policy.
    AbstractFlag,

    /// A policy-qualified replace named fields the policy hides. All
    /// offending names are listed.
    HiddenFields {
        /// Every hidden field named by the changes.
        names: Vec<Key>,
    },

    /// A policy-qualified read targeted a field the policy hides.
    HiddenField {
        /// The hidden field.
        name: Key,
    },

    /// An error propagated from a record or collaborator primitive.
    Field(FieldError),
}

impl ReflectError {
    /// The taxonomy category this error falls under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReflectError::NoImplFound { .. } | ReflectError::NoSuchField { .. } => {
                ErrorKind::NotFound
            }
            ReflectError::AmbiguousImpl { .. } => ErrorKind::Ambiguous,
            ReflectError::InvalidKeys { .. } | ReflectError::AbstractFlag => {
                ErrorKind::InvalidArgument
            }
            ReflectError::HiddenFields { .. } | ReflectError::HiddenField { .. } => {
                ErrorKind::PolicyViolation
            }
            ReflectError::Field(FieldError::NoSuchFields { .. }) => ErrorKind::NotFound,
            ReflectError::Field(_) => ErrorKind::InvalidArgument,
        }
    }
}

fn write_shapes(f: &mut core::fmt::Formatter<'_>, shapes: &[Shape]) -> core::fmt::Result {
    write!(f, "(")?;
    for (i, shape) in shapes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{shape}")?;
    }
    write!(f, ")")
}

fn write_keys(f: &mut core::fmt::Formatter<'_>, keys: &[Key]) -> core::fmt::Result {
    write!(f, "{{")?;
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "'{key}'")?;
    }
    write!(f, "}}")
}

impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReflectError::NoImplFound { op, shapes } => {
                write!(f, "`{op}` could not be resolved for argument shapes ")?;
                write_shapes(f, shapes)
            }
            ReflectError::AmbiguousImpl { op, shapes, count } => {
                write!(f, "`{op}` is ambiguous for argument shapes ")?;
                write_shapes(f, shapes)?;
                write!(f, ": {count} implementations match with equal specificity")
            }
            ReflectError::NoSuchField { name, on } => match on {
                LookupTarget::Mapping => write!(f, "key '{name}' not found in mapping"),
                LookupTarget::Record => write!(f, "field '{name}' not found on record"),
                LookupTarget::Custom(ty) => write!(f, "field '{name}' not found on {ty}"),
            },
            ReflectError::InvalidKeys { keys } => {
                write!(f, "invalid keys ")?;
                write_keys(f, keys)
            }
            ReflectError::AbstractFlag => {
                write!(
                    f,
                    "do not use the abstract flag directly, only concrete flags select a policy"
                )
            }
            ReflectError::HiddenFields { names } => {
                write!(f, "fields ")?;
                write_keys(f, names)?;
                write!(f, " are hidden from the textual representation and cannot be replaced")
            }
            ReflectError::HiddenField { name } => {
                write!(f, "field '{name}' is hidden from the textual representation")
            }
            ReflectError::Field(inner) => write!(f, "{inner}"),
        }
    }
}

impl core::fmt::Debug for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Use Display implementation for more readable output
        write!(f, "ReflectError({self})")
    }
}

impl core::error::Error for ReflectError {}

impl From<FieldError> for ReflectError {
    fn from(e: FieldError) -> Self {
        ReflectError::Field(e)
    }
}
