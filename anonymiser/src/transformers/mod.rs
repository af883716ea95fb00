//! Ready-made transformation functions.
//!
//! Everything here returns a closure that can be passed straight to
//! [`RegistryBuilder::transformer`](crate::RegistryBuilder::transformer) or
//! [`Registry::register`](crate::Registry::register):
//!
//! ```rust
//! use anonymiser::{transformers, Registry};
//!
//! let registry = Registry::builder()
//!     .transformer("name", transformers::constant("redacted".to_string()))
//!     .transformer("card", transformers::TextPolicy::keep_last(4).transformer())
//!     .transformer("notes", transformers::zero::<Vec<String>>())
//!     .build()
//!     .unwrap();
//! assert_eq!(registry.len(), 3);
//! ```

#[cfg(feature = "pseudonym")]
mod pseudonym;
mod text;

#[cfg(feature = "pseudonym")]
pub use pseudonym::Pseudonymiser;
pub use text::{Segments, TextPolicy, MASK_CHAR, REDACTED_PLACEHOLDER};

/// Always returns a clone of `value`.
pub fn constant<T>(value: T) -> impl Fn(&T) -> T + Send + Sync + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |_: &T| value.clone()
}

/// Always returns `T::default()`.
///
/// In a derived struct the zero result is not written, so the field keeps the
/// copy's default value.
pub fn zero<T>() -> impl Fn(&T) -> T + Send + Sync + 'static
where
    T: Default + 'static,
{
    |_: &T| T::default()
}

/// Returns a clone of the input.
pub fn identity<T>() -> impl Fn(&T) -> T + Send + Sync + 'static
where
    T: Clone + 'static,
{
    |value: &T| value.clone()
}

/// Applies `transform` to every element of a `Vec`, in order.
pub fn each<T, F>(transform: F) -> impl Fn(&Vec<T>) -> Vec<T> + Send + Sync + 'static
where
    T: 'static,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    move |values: &Vec<T>| values.iter().map(&transform).collect()
}

/// Applies `transform` to the value inside an `Option`; `None` stays `None`.
pub fn each_some<T, F>(transform: F) -> impl Fn(&Option<T>) -> Option<T> + Send + Sync + 'static
where
    T: 'static,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    move |value: &Option<T>| value.as_ref().map(&transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_ignores_input() {
        let transform = constant(7_u8);
        assert_eq!(transform(&1), 7);
        assert_eq!(transform(&200), 7);
    }

    #[test]
    fn zero_returns_default() {
        let transform = zero::<String>();
        assert_eq!(transform(&"x".to_string()), "");
    }

    #[test]
    fn identity_returns_input() {
        let transform = identity::<Vec<u8>>();
        assert_eq!(transform(&vec![1, 2]), vec![1, 2]);
    }

    #[test]
    fn each_keeps_order() {
        let transform = each(|value: &String| format!("{value}-anon"));
        assert_eq!(
            transform(&vec!["a".to_string(), "b".to_string()]),
            vec!["a-anon".to_string(), "b-anon".to_string()]
        );
    }

    #[test]
    fn each_some_keeps_absence() {
        let transform = each_some(|value: &u32| value + 1);
        assert_eq!(transform(&Some(1)), Some(2));
        assert_eq!(transform(&None), None);
    }
}
