//! Pointers and optional values.
//!
//! An absent value stays absent: `None` is returned without allocating. A
//! present pointee is anonymised into a new allocation, so the copy never
//! shares memory with the input. Interior cells are read through their
//! non-blocking accessors; a cell that cannot be read right now (borrowed,
//! locked or poisoned) is an invalid value. Such a cell also reports itself
//! as non-zero.
//!
//! Raw pointers are outside the supported set and always fail.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::{Arc, Mutex, RwLock, TryLockError},
};

use super::{Anonymise, Shape};
use crate::{
    error::{Error, Result},
    registry::Registry,
};

impl<T> Anonymise for Option<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        self.as_ref()
            .map(|value| value.anonymise_with(registry))
            .transpose()
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> Anonymise for Box<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        Ok(Box::new((**self).anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        false
    }
}

impl<T> Anonymise for Rc<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        Ok(Rc::new((**self).anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        false
    }
}

impl<T> Anonymise for Arc<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        Ok(Arc::new((**self).anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        false
    }
}

impl<T> Anonymise for Cell<T>
where
    T: Anonymise + Copy,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        Ok(Cell::new(self.get().anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        self.get().is_zero()
    }
}

impl<T> Anonymise for RefCell<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let inner = self
            .try_borrow()
            .map_err(|_| Error::invalid::<Self>("already mutably borrowed"))?;
        Ok(RefCell::new(inner.anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        self.try_borrow().is_ok_and(|inner| inner.is_zero())
    }
}

// Never blocks: a held lock is an invalid value, like a borrowed `RefCell`.
fn lock_error<L, G>(err: TryLockError<G>) -> Error {
    match err {
        TryLockError::Poisoned(_) => Error::invalid::<L>("lock poisoned"),
        TryLockError::WouldBlock => Error::invalid::<L>("lock already held"),
    }
}

impl<T> Anonymise for Mutex<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let inner = self.try_lock().map_err(lock_error::<Self, _>)?;
        Ok(Mutex::new(inner.anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        self.try_lock().is_ok_and(|inner| inner.is_zero())
    }
}

impl<T> Anonymise for RwLock<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Pointer;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let inner = self.try_read().map_err(lock_error::<Self, _>)?;
        Ok(RwLock::new(inner.anonymise_with(registry)?))
    }

    fn is_zero(&self) -> bool {
        self.try_read().is_ok_and(|inner| inner.is_zero())
    }
}

impl<T: ?Sized> Anonymise for *const T {
    const SHAPE: Shape = Shape::RawPointer;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Err(Error::UnsupportedShape(Self::SHAPE))
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Anonymise for *mut T {
    const SHAPE: Shape = Shape::RawPointer;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Err(Error::UnsupportedShape(Self::SHAPE))
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}
