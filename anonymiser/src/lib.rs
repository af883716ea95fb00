//! Anonymised deep copies of typed values.
//!
//! Mark sensitive fields where the type is defined, register a transformation
//! function per marker, and ask for a copy:
//!
//! ```rust
//! use anonymiser::{transformers, Anonymise, Anonymisable, Registry};
//!
//! #[derive(Anonymise, Debug, Default, PartialEq)]
//! struct Account {
//!     pub id: u64,
//!     #[anonymise("email")]
//!     pub email: String,
//! }
//!
//! let registry = Registry::builder()
//!     .transformer("email", transformers::TextPolicy::keep_first(2).transformer())
//!     .build()
//!     .unwrap();
//!
//! let account = Account { id: 7, email: "ada@example.com".into() };
//! let copy = account.anonymise(&registry).unwrap();
//! assert_eq!(copy, Account { id: 7, email: "ad*************".into() });
//! ```
//!
//! Key rules:
//! - The copy has the same shape as the input. Only fields carrying
//!   `#[anonymise("name")]` change: they hold the output of the transformer
//!   registered under `name`.
//! - A marker with no registry entry fails the whole call with
//!   [`Error::MissingTransformer`]; no partial copy is returned.
//! - Private fields of derived structs are neither read nor written: the copy
//!   holds their `Default` value.
//! - A field whose result is a zero value (`0`, `""`, `None`, empty
//!   collection) is not written, leaving the copy's `Default` in place.
//! - `None`, absent collections and absent dynamic values stay absent.
//!
//! What this crate does:
//! - defines the [`Anonymise`] trait and implements it for scalars, time
//!   types, pointers, cells, sequences, arrays, maps, sets and tuples
//! - provides the [`Registry`] of named transformers and some ready-made
//!   [`transformers`]
//! - provides integrations behind feature flags (`slog`, `chrono`)
//!
//! What it does not do:
//! - perform I/O or logging of its own
//! - detect cycles: a self-referential value recurses without bound
//!
//! The `Anonymise` derive macro lives in `anonymiser-derive` and is
//! re-exported when the `derive` feature is enabled.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else,
    clippy::ptr_arg
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use anonymiser_derive::Anonymise;

#[allow(unused_extern_crates)]
extern crate self as anonymiser;

mod engine;
mod error;
mod registry;
#[cfg(feature = "slog")]
pub mod slog;
pub mod transformers;

pub use engine::{anonymise, Anonymisable, Anonymise, DynAnonymise, Shape};
pub use error::{Error, Result};
pub use registry::{Registry, RegistryBuilder};

#[doc(hidden)]
pub use engine::assign_non_zero;
