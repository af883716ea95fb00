//! Errors raised while building a [`Registry`](crate::Registry) or producing
//! an anonymised copy.
//!
//! Traversal never recovers from an error: the first failure anywhere in the
//! value tree aborts the whole call and is returned to the caller as-is.

use thiserror::Error;

use crate::engine::Shape;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the engine and the registry can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value cannot be read (e.g. a `RefCell` that is mutably borrowed or
    /// a poisoned lock).
    #[error("invalid value of type `{type_name}`: {reason}")]
    InvalidValue {
        type_name: &'static str,
        reason: &'static str,
    },

    /// A field marker names an entry that is not in the registry.
    #[error("missing anonymiser for: {0}")]
    MissingTransformer(String),

    /// The registered transformer accepts a different type than the field it
    /// was applied to.
    #[error(
        "anonymiser `{marker}` is registered for `{registered}` but was applied to `{expected}`"
    )]
    TransformerTypeMismatch {
        marker: String,
        expected: &'static str,
        registered: &'static str,
    },

    /// The value's shape is outside the set the engine can copy.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(Shape),

    /// A transformer was registered under an empty marker name.
    #[error("marker names must not be empty")]
    EmptyMarker,

    /// Two transformers were registered under the same marker name.
    #[error("anonymiser already registered for: {0}")]
    DuplicateTransformer(String),
}

impl Error {
    pub(crate) fn invalid<T: ?Sized>(reason: &'static str) -> Self {
        Self::InvalidValue {
            type_name: std::any::type_name::<T>(),
            reason,
        }
    }
}
