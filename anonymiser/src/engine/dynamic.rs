//! Values whose concrete type is only known at traversal time.
//!
//! A `Box<dyn DynAnonymise>` holds any `Anonymise` value behind a trait
//! object. Anonymising it anonymises the concrete value and boxes the result
//! behind the same trait object type. Absence is spelled
//! `Option<Box<dyn DynAnonymise>>`.

use std::any::{type_name, Any};

use super::{Anonymise, Shape};
use crate::{error::Result, registry::Registry};

/// Object-safe form of [`Anonymise`].
///
/// Blanket-implemented for every `Anonymise + Send + Sync + 'static` type, so
/// any such value can be boxed as `Box<dyn DynAnonymise>`.
pub trait DynAnonymise: Any + Send + Sync {
    /// Anonymises the concrete value and boxes the copy.
    fn anonymise_dyn(&self, registry: &Registry) -> Result<Box<dyn DynAnonymise>>;

    /// Shape of the concrete value.
    fn dyn_shape(&self) -> Shape;

    /// Type name of the concrete value.
    fn dyn_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<T> DynAnonymise for T
where
    T: Anonymise + Send + Sync + 'static,
{
    fn anonymise_dyn(&self, registry: &Registry) -> Result<Box<dyn DynAnonymise>> {
        Ok(Box::new(self.anonymise_with(registry)?))
    }

    fn dyn_shape(&self) -> Shape {
        T::SHAPE
    }

    fn dyn_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn DynAnonymise {
    /// Returns `true` if the concrete value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrows the concrete value as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl Anonymise for Box<dyn DynAnonymise> {
    const SHAPE: Shape = Shape::Dynamic;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        (**self).anonymise_dyn(registry)
    }

    fn is_zero(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        thread,
    };

    use super::*;
    use crate::Error;

    #[test]
    fn concrete_value_is_copied_behind_trait_object() {
        let registry = Registry::new();
        let value: Box<dyn DynAnonymise> = Box::new(vec![1_u32, 2, 3]);
        let copy = value.anonymise_with(&registry).unwrap();
        let inner: &dyn DynAnonymise = &*copy;
        assert!(inner.is::<Vec<u32>>());
        assert_eq!(inner.downcast_ref::<Vec<u32>>(), Some(&vec![1, 2, 3]));
        assert_eq!(inner.dyn_shape(), Shape::Sequence);
        assert!(inner.dyn_type_name().contains("Vec<u32>"));
    }

    #[test]
    fn absent_dynamic_value_stays_absent() {
        let registry = Registry::new();
        let value: Option<Box<dyn DynAnonymise>> = None;
        assert!(value.anonymise_with(&registry).unwrap().is_none());
    }

    #[test]
    fn failures_inside_dynamic_value_propagate() {
        let registry = Registry::new();
        let mutex = Arc::new(Mutex::new(0_u8));
        let poisoner = Arc::clone(&mutex);
        let _ = thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let value: Box<dyn DynAnonymise> = Box::new(mutex);
        assert!(matches!(
            value.anonymise_with(&registry),
            Err(Error::InvalidValue { .. })
        ));
    }
}
