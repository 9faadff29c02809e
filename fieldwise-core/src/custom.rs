use core::any::Any;

use crate::field::FieldError;
use crate::value::Value;

/// A third-party record-like collaborator.
///
/// Types outside this crate family participate in `get_field` and both
/// forms of `replace` by exposing their own copy-with-changes primitive.
/// They do not get a `fields` implementation: their schema is theirs to
/// keep.
pub trait CopyReplace: core::fmt::Debug + Send + Sync {
    /// The collaborator's type name, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Reads the named member, if it exists.
    fn get(&self, name: &str) -> Option<Value>;

    /// Produces a new value of the same type with the given members
    /// replaced. Unknown names are the collaborator's error to raise.
    fn with_changes(&self, changes: &[(String, Value)]) -> Result<Value, FieldError>;

    /// Equality against another collaborator of unknown concrete type.
    /// Implementors typically downcast through [`CopyReplace::as_any`].
    fn dyn_eq(&self, other: &dyn CopyReplace) -> bool;

    /// Upcast for downcasting in [`CopyReplace::dyn_eq`].
    fn as_any(&self) -> &dyn Any;
}
