//! Shared field code generation for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;

use crate::{generics::collect_generics_from_type, marker::Marker};

/// Accumulated state while generating field code.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) root: &'a TokenStream,
    pub(crate) processed_generics: &'a mut Vec<Ident>,
    pub(crate) marked_generics: &'a mut Vec<Ident>,
}

/// Generates an expression producing the copy of one field.
///
/// `value` must evaluate to a reference to the field's current value. The
/// expression uses `?`, so it must be placed inside `anonymise_with`, where
/// `registry` is in scope.
///
/// | Marker | Generated expression |
/// |--------|----------------------|
/// | None | `Anonymise::anonymise_with(value, registry)?` |
/// | `"name"` | `Registry::apply::<Ty>(registry, "name", value)?` |
pub(crate) fn generate_field_value(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    value: &TokenStream,
    span: Span,
    marker: &Marker,
) -> TokenStream {
    let root = ctx.root;
    collect_generics_from_type(ty, ctx.generics, ctx.processed_generics);

    match marker {
        Marker::Unmarked => quote_spanned! { span =>
            #root::Anonymise::anonymise_with(#value, registry)?
        },
        Marker::Named(name) => {
            collect_generics_from_type(ty, ctx.generics, ctx.marked_generics);
            quote_spanned! { span =>
                #root::Registry::apply::<#ty>(registry, #name, #value)?
            }
        }
    }
}
