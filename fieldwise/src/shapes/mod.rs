//! Per-shape implementations of the operations.
//!
//! Each module registers its implementations into the [`Registry`] during
//! initialization: records, mappings, copy-replace collaborators, and the
//! generic fallbacks defined in terms of `fields`.
//!
//! [`Registry`]: crate::dispatch::Registry

pub(crate) mod copyreplace;
pub(crate) mod generic;
pub(crate) mod mapping;
pub(crate) mod record;
