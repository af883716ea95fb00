//! Runtime support for derived structs, and tuples.
//!
//! `#[derive(Anonymise)]` allocates the copy with `Default::default()` and
//! fills each processed field through [`assign_non_zero`]. Tuples have no
//! default allocation and no private fields, so they are rebuilt directly.
//! `PhantomData` carries no value and puts no bound on its parameter.

use std::marker::PhantomData;

use super::{Anonymise, Shape};
use crate::{error::Result, registry::Registry};

/// Writes `value` into `slot` unless it is a zero value.
///
/// A zero result leaves the slot at whatever the copy's `Default` put there.
#[doc(hidden)]
pub fn assign_non_zero<T: Anonymise>(slot: &mut T, value: T) {
    if !value.is_zero() {
        *slot = value;
    }
}

impl<T: ?Sized> Anonymise for PhantomData<T> {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(PhantomData)
    }

    fn is_zero(&self) -> bool {
        true
    }
}

macro_rules! impl_anonymise_tuple {
    ($($name:ident $var:ident),+) => {
        impl<$($name),+> Anonymise for ($($name,)+)
        where
            $($name: Anonymise,)+
        {
            const SHAPE: Shape = Shape::Struct;

            fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
                let ($($var,)+) = self;
                Ok(($($var.anonymise_with(registry)?,)+))
            }

            fn is_zero(&self) -> bool {
                let ($($var,)+) = self;
                true $(&& $var.is_zero())+
            }
        }
    };
}

impl_anonymise_tuple!(A a);
impl_anonymise_tuple!(A a, B b);
impl_anonymise_tuple!(A a, B b, C c);
impl_anonymise_tuple!(A a, B b, C c, D d);
impl_anonymise_tuple!(A a, B b, C c, D d, E e);
impl_anonymise_tuple!(A a, B b, C c, D d, E e, F f);
