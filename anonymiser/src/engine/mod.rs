//! The recursive copy engine.
//!
//! Every type that can be copied implements [`Anonymise`]. The trait is the
//! dispatcher: the compiler picks the implementation for the value's shape, and
//! each implementation calls back into the trait for nested values.
//!
//! - **`scalar`**: numbers, strings, callables, channels - returned as-is
//! - **`opaque`**: time types recognized by exact type - returned unmodified
//! - **`structure`**: tuples and the runtime support for derived structs
//! - **`pointer`**: `Option`, `Box`, `Rc`, `Arc`, interior cells, raw pointers
//! - **`dynamic`**: `Box<dyn DynAnonymise>`
//! - **`sequence`**: `Vec`, `VecDeque`, boxed slices, arrays
//! - **`associative`**: hash and B-tree maps and sets
//!
//! Structs and enums get their implementation from `#[derive(Anonymise)]`.

use std::fmt;

use crate::{error::Result, registry::Registry};

mod associative;
mod dynamic;
mod opaque;
mod pointer;
mod scalar;
mod sequence;
mod structure;

pub use dynamic::DynAnonymise;
pub use structure::assign_non_zero;

/// Structural category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Numbers, booleans, characters, strings, callables and channels.
    Scalar,
    /// Types recognized by identity and returned unmodified (timestamps).
    Opaque,
    /// Named fields: derived structs and enums, tuples.
    Struct,
    /// Zero-or-one owned value: `Option`, `Box`, `Rc`, `Arc`, cells.
    Pointer,
    /// A value whose concrete type is only known at traversal time.
    Dynamic,
    /// Variable-length ordered elements.
    Sequence,
    /// Fixed-length ordered elements.
    Array,
    /// Key/value pairs or sets.
    Associative,
    /// Raw pointers. Never copied.
    RawPointer,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::Opaque => "opaque",
            Self::Struct => "struct",
            Self::Pointer => "pointer",
            Self::Dynamic => "dynamic",
            Self::Sequence => "sequence",
            Self::Array => "array",
            Self::Associative => "associative",
            Self::RawPointer => "raw pointer",
        })
    }
}

/// A type that can produce an anonymised copy of itself.
///
/// The copy is structurally identical to `self` except at struct fields marked
/// with `#[anonymise("name")]`, which hold the output of the transformer
/// registered under `name`. `self` is only borrowed and is never modified.
///
/// ## Zero values
///
/// [`is_zero`](Self::is_zero) reports whether a value is its shape's empty
/// value (`0`, `""`, `None`, an empty collection, ...). Derived structs use it
/// to decide whether a field result is written into the copy: a zero result
/// leaves the copy's field at its `Default` value. As a consequence a field
/// that was transformed into a legitimate zero value cannot be told apart from
/// one that was left untouched.
///
/// `is_zero` never blocks. A `RefCell`, `Mutex` or `RwLock` that cannot be
/// read at that moment reports `false`, whatever it holds.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be anonymised",
    label = "this type has no `Anonymise` implementation",
    note = "use `#[derive(Anonymise)]` on the type definition",
    note = "foreign types can be wrapped in a local newtype that implements `Anonymise`"
)]
pub trait Anonymise: Sized {
    /// The shape this implementation handles.
    const SHAPE: Shape;

    /// Returns an anonymised copy of `self`.
    fn anonymise_with(&self, registry: &Registry) -> Result<Self>;

    /// Returns `true` if `self` is the zero value of its shape.
    fn is_zero(&self) -> bool;
}

/// Produces an anonymised copy of `value`.
///
/// The first failure anywhere in the value tree aborts the call; no partial
/// copy is returned.
pub fn anonymise<T: Anonymise>(registry: &Registry, value: &T) -> Result<T> {
    value.anonymise_with(registry)
}

/// Method-call form of [`anonymise`].
///
/// Blanket-implemented for every [`Anonymise`] type.
pub trait Anonymisable: Anonymise {
    /// Produces an anonymised copy of `self` using `registry`.
    fn anonymise(&self, registry: &Registry) -> Result<Self> {
        anonymise(registry, self)
    }
}

impl<T> Anonymisable for T where T: Anonymise {}
