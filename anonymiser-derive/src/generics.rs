//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in processed fields:
//! private struct fields are never touched and put no requirement on their
//! type parameters.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics. Its `Anonymise` impl
//! holds for every `T`, so `T` does not need to implement `Anonymise`.

use syn::{parse_quote, Ident};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(qself) = &path.qself {
                collect_generics_from_type(&qself.ty, generics, result);
            }
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for segment in &path.path.segments {
                for param in generics.type_params() {
                    if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Ptr(pointer) => collect_generics_from_type(&pointer.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

/// Adds `bound` to every generic parameter listed in `used_generics`.
pub(crate) fn add_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
    bound: &syn::TypeParamBound,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(bound.clone());
        }
    }
    generics
}

/// Marked fields are looked up in the registry by `TypeId`, so every generic
/// they mention must be `'static`.
pub(crate) fn add_static_bounds(generics: syn::Generics, marked_generics: &[Ident]) -> syn::Generics {
    add_bounds(generics, marked_generics, &parse_quote!('static))
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn collect(ty: proc_macro2::TokenStream, generics: &syn::Generics) -> Vec<String> {
        let ty: syn::Type = syn::parse2(ty).expect("should parse as Type");
        let mut result = Vec::new();
        collect_generics_from_type(&ty, generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn nested_generics_are_found() {
        let generics: syn::Generics = parse_quote!(<T, U, V>);
        assert_eq!(collect(quote!(Vec<Option<T>>), &generics), vec!["T"]);
        assert_eq!(collect(quote!(HashMap<U, T>), &generics), vec!["U", "T"]);
    }

    #[test]
    fn arrays_tuples_and_references_are_walked() {
        let generics: syn::Generics = parse_quote!(<T, U>);
        assert_eq!(collect(quote!([T; 3]), &generics), vec!["T"]);
        assert_eq!(collect(quote!((T, Box<U>)), &generics), vec!["T", "U"]);
        assert_eq!(collect(quote!(&'static [U]), &generics), vec!["U"]);
    }

    #[test]
    fn phantom_data_is_skipped() {
        let generics: syn::Generics = parse_quote!(<T>);
        assert!(collect(quote!(PhantomData<T>), &generics).is_empty());
    }

    #[test]
    fn duplicates_are_collected_once() {
        let generics: syn::Generics = parse_quote!(<T>);
        assert_eq!(collect(quote!((T, T, Vec<T>)), &generics), vec!["T"]);
    }

    #[test]
    fn bounds_are_added_only_to_used_generics() {
        let generics: syn::Generics = parse_quote!(<T, U>);
        let used = vec![Ident::new("T", proc_macro2::Span::call_site())];
        let bounded = add_static_bounds(generics, &used);
        let rendered = quote!(#bounded).to_string();
        assert!(rendered.contains("T : 'static"));
        assert!(!rendered.contains("U : 'static"));
    }
}
