//! Sequences and arrays.
//!
//! Elements are anonymised in order into a new container sized for the
//! source; the first failing element aborts the copy. Arrays keep their length.
//! An absent sequence is `Option<Vec<T>>::None` and is preserved by the
//! `Option` implementation, separately from an empty one.

use std::collections::VecDeque;

use super::{Anonymise, Shape};
use crate::{
    error::{Error, Result},
    registry::Registry,
};

impl<T> Anonymise for Vec<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Sequence;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = Vec::with_capacity(self.len());
        for item in self {
            copy.push(item.anonymise_with(registry)?);
        }
        Ok(copy)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Anonymise for VecDeque<T>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Sequence;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = VecDeque::with_capacity(self.len());
        for item in self {
            copy.push_back(item.anonymise_with(registry)?);
        }
        Ok(copy)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Anonymise for Box<[T]>
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Sequence;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = Vec::with_capacity(self.len());
        for item in self.iter() {
            copy.push(item.anonymise_with(registry)?);
        }
        Ok(copy.into_boxed_slice())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Anonymise for [T; N]
where
    T: Anonymise,
{
    const SHAPE: Shape = Shape::Array;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = Vec::with_capacity(N);
        for item in self {
            copy.push(item.anonymise_with(registry)?);
        }
        copy.try_into()
            .map_err(|_| Error::invalid::<Self>("array length changed during copy"))
    }

    fn is_zero(&self) -> bool {
        self.iter().all(T::is_zero)
    }
}
