//! Struct-specific `Anonymise` derivation.
//!
//! The copy starts from `Self::default()`. Each public field is copied (or
//! transformed, when marked) and written into the copy only when the result
//! is not a zero value. Private fields are never read and keep their default.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Member, Result, Visibility};

use crate::{
    marker::parse_field_marker,
    transform::{generate_field_value, DeriveContext},
    DeriveOutput,
};

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    if matches!(data.fields, Fields::Unit) {
        return Ok(DeriveOutput {
            anonymise_body: quote! { ::core::result::Result::Ok(Self) },
            is_zero_body: quote! { true },
            processed_generics: Vec::new(),
            marked_generics: Vec::new(),
            needs_default: false,
        });
    }

    let mut assignments = Vec::new();
    let mut zero_checks = Vec::new();
    let mut processed_generics = Vec::new();
    let mut marked_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        root,
        processed_generics: &mut processed_generics,
        marked_generics: &mut marked_generics,
    };

    for (index, field) in data.fields.iter().enumerate() {
        let span = field.span();
        let marker = parse_field_marker(&field.attrs)?;

        if matches!(field.vis, Visibility::Inherited) {
            if marker.is_named() {
                return Err(syn::Error::new(
                    span,
                    "private fields are never read by `Anonymise`; make the field public to mark it",
                ));
            }
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };
        let value = generate_field_value(
            &mut ctx,
            &field.ty,
            &quote! { &self.#member },
            span,
            &marker,
        );

        assignments.push(quote_spanned! { span =>
            #root::assign_non_zero(&mut copy.#member, #value);
        });
        zero_checks.push(quote_spanned! { span =>
            #root::Anonymise::is_zero(&self.#member)
        });
    }

    let is_zero_body = if zero_checks.is_empty() {
        quote! { true }
    } else {
        quote! { #(#zero_checks)&&* }
    };

    Ok(DeriveOutput {
        anonymise_body: quote! {
            let mut copy: Self = ::core::default::Default::default();
            #(#assignments)*
            ::core::result::Result::Ok(copy)
        },
        is_zero_body,
        processed_generics,
        marked_generics,
        needs_default: true,
    })
}

