//! Scalars are returned as-is.
//!
//! Copying a number or a string is the copy. Function pointers and channel
//! senders are handed back as the same callable / a handle to the same
//! channel: there is nothing inside them to anonymise.

use std::{
    borrow::Cow,
    sync::mpsc::{Sender, SyncSender},
};

use super::{Anonymise, Shape};
use crate::{error::Result, registry::Registry};

macro_rules! impl_anonymise_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Anonymise for $ty {
                const SHAPE: Shape = Shape::Scalar;

                fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
                    Ok(*self)
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_anonymise_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Negative zero has a sign bit set and is not the zero value.
macro_rules! impl_anonymise_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Anonymise for $ty {
                const SHAPE: Shape = Shape::Scalar;

                fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
                    Ok(*self)
                }

                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )+
    };
}

impl_anonymise_float!(f32, f64);

impl Anonymise for bool {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(*self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Anonymise for char {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(*self)
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Anonymise for () {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(())
    }

    fn is_zero(&self) -> bool {
        true
    }
}

impl Anonymise for String {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Anonymise for &str {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(*self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Anonymise for Cow<'_, str> {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_anonymise_fn_pointer {
    ($($arg:ident),*) => {
        impl<$($arg,)* R> Anonymise for fn($($arg),*) -> R {
            const SHAPE: Shape = Shape::Scalar;

            fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
                Ok(*self)
            }

            fn is_zero(&self) -> bool {
                false
            }
        }
    };
}

impl_anonymise_fn_pointer!();
impl_anonymise_fn_pointer!(A);
impl_anonymise_fn_pointer!(A, B);
impl_anonymise_fn_pointer!(A, B, C);
impl_anonymise_fn_pointer!(A, B, C, D);

impl<T> Anonymise for Sender<T> {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(self.clone())
    }

    fn is_zero(&self) -> bool {
        false
    }
}

impl<T> Anonymise for SyncSender<T> {
    const SHAPE: Shape = Shape::Scalar;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(self.clone())
    }

    fn is_zero(&self) -> bool {
        false
    }
}
