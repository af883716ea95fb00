//! Enum-specific `Anonymise` derivation.
//!
//! Each variant is rebuilt from its copied fields. Variant fields are always
//! public, so all of them are processed, and no zero-skip applies: the copy is
//! constructed directly rather than written over a default.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    marker::parse_field_marker,
    transform::{generate_field_value, DeriveContext},
    DeriveOutput,
};

pub(crate) fn derive_enum(
    data: DataEnum,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut arms = Vec::new();
    let mut processed_generics = Vec::new();
    let mut marked_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        root,
        processed_generics: &mut processed_generics,
        marked_generics: &mut marked_generics,
    };

    for variant in &data.variants {
        arms.push(derive_variant(&mut ctx, &variant.ident, &variant.fields)?);
    }

    let anonymise_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(DeriveOutput {
        anonymise_body,
        is_zero_body: quote! { false },
        processed_generics,
        marked_generics,
        needs_default: false,
    })
}

fn derive_variant(
    ctx: &mut DeriveContext<'_>,
    variant: &Ident,
    fields: &Fields,
) -> Result<TokenStream> {
    let mut bindings = Vec::new();
    let mut values = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let marker = parse_field_marker(&field.attrs)?;
        let binding = format_ident!("field_{}", index);
        values.push(generate_field_value(
            ctx,
            &field.ty,
            &quote! { #binding },
            field.span(),
            &marker,
        ));
        bindings.push(binding);
    }

    let arm = match fields {
        Fields::Unit => quote! {
            Self::#variant => ::core::result::Result::Ok(Self::#variant),
        },
        Fields::Named(named) => {
            let names: Vec<_> = named.named.iter().filter_map(|f| f.ident.as_ref()).collect();
            quote! {
                Self::#variant { #(#names: #bindings),* } => {
                    ::core::result::Result::Ok(Self::#variant { #(#names: #values),* })
                }
            }
        }
        Fields::Unnamed(_) => quote! {
            Self::#variant(#(#bindings),*) => {
                ::core::result::Result::Ok(Self::#variant(#(#values),*))
            }
        },
    };
    Ok(arm)
}
