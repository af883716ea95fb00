//! Derive macro for `anonymiser`.
//!
//! This crate generates the copy code behind `#[derive(Anonymise)]`. It:
//! - reads `#[anonymise("name")]` field attributes
//! - emits an `Anonymise` implementation that copies every public field and
//!   routes marked fields through the registry
//!
//! It does **not** define transformers. Those are registered at runtime in the
//! main `anonymiser` crate.

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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::{Ident, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Result};

mod derive_enum;
mod derive_struct;
mod generics;
mod marker;
mod transform;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_bounds, add_static_bounds};
use marker::reject_container_attributes;

/// Derives `anonymiser::Anonymise` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is copied recursively through its own
///   `Anonymise` impl.
/// - `#[anonymise("name")]`: the field is replaced by the output of the
///   transformer registered under `name`. The transformer must accept the
///   field's exact type.
///
/// # Structs
///
/// The copy starts from `Default::default()`, so the struct must implement
/// `Default`. Public fields are copied and written only when the result is
/// not a zero value. Private fields are never read and keep their default;
/// marking a private field is a compile error.
///
/// # Enums
///
/// The active variant is rebuilt with every field copied. No `Default` is
/// needed and an enum value is never considered zero.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Anonymise, attributes(anonymise))]
pub fn derive_anonymise(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the anonymiser crate root.
///
/// Handles crate renaming (e.g., `anon = { package = "anonymiser", ... }`).
/// Inside `anonymiser` itself the crate is reachable as `::anonymiser`
/// through its `extern crate self` alias, which also keeps doctests working.
fn crate_root() -> TokenStream {
    match crate_name("anonymiser") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::anonymiser },
    }
}

pub(crate) struct DeriveOutput {
    pub(crate) anonymise_body: TokenStream,
    pub(crate) is_zero_body: TokenStream,
    pub(crate) processed_generics: Vec<Ident>,
    pub(crate) marked_generics: Vec<Ident>,
    pub(crate) needs_default: bool,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attributes(&attrs)?;

    let root = crate_root();

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics, &root)?,
        Data::Enum(data) => derive_enum(data, &generics, &root)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Anonymise` cannot be derived for unions",
            ));
        }
    };

    let (_, ty_generics, _) = generics.split_for_impl();
    let self_ty: syn::Type = parse_quote!(#ident #ty_generics);

    let mut impl_generics = add_bounds(
        generics.clone(),
        &output.processed_generics,
        &parse_quote!(#root::Anonymise),
    );
    impl_generics = add_static_bounds(impl_generics, &output.marked_generics);
    if output.needs_default {
        impl_generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#self_ty: ::core::default::Default));
    }
    let (impl_generics, ty_generics, where_clause) = impl_generics.split_for_impl();

    let DeriveOutput {
        anonymise_body,
        is_zero_body,
        ..
    } = output;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #root::Anonymise for #ident #ty_generics #where_clause {
            const SHAPE: #root::Shape = #root::Shape::Struct;

            fn anonymise_with(
                &self,
                registry: &#root::Registry,
            ) -> ::core::result::Result<Self, #root::Error> {
                #anonymise_body
            }

            fn is_zero(&self) -> bool {
                #is_zero_body
            }
        }
    })
}
