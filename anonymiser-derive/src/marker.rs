//! Parsing of `#[anonymise("name")]` field attributes.
//!
//! A field carries at most one marker. Every malformed form is rejected with
//! a spanned compile error instead of being ignored.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

pub(crate) const ATTRIBUTE: &str = "anonymise";

/// What a field's attributes say about it.
///
/// | Attribute | Marker | Behavior |
/// |-----------|--------|----------|
/// | None | `Unmarked` | Field is copied recursively |
/// | `#[anonymise("name")]` | `Named("name")` | Field is replaced by the `name` transformer |
#[derive(Clone, Debug)]
pub(crate) enum Marker {
    Unmarked,
    Named(LitStr),
}

impl Marker {
    pub(crate) fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

fn set_marker(target: &mut Option<Marker>, next: Marker, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[anonymise] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_marker(attrs: &[Attribute]) -> Result<Marker> {
    let mut marker: Option<Marker> = None;
    for attr in attrs {
        if !attr.path().is_ident(ATTRIBUTE) {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected a marker name (e.g., #[anonymise(\"email\")])",
                ));
            }
            Meta::List(list) => {
                let name = syn::parse2::<LitStr>(list.tokens.clone()).map_err(|_| {
                    syn::Error::new(
                        attr.span(),
                        "expected a marker name string literal (e.g., #[anonymise(\"email\")])",
                    )
                })?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(
                        name.span(),
                        "marker names must not be empty",
                    ));
                }
                set_marker(&mut marker, Marker::Named(name), attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[anonymise]; use #[anonymise(\"name\")]",
                ));
            }
        }
    }

    Ok(marker.unwrap_or(Marker::Unmarked))
}

/// Container-level `#[anonymise]` has no meaning and is rejected.
pub(crate) fn reject_container_attributes(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident(ATTRIBUTE)) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[anonymise] is only supported on fields",
        )),
        None => Ok(()),
    }
}
