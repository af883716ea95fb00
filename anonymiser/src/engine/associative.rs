//! Maps and sets.
//!
//! Keys and values both go through the dispatcher: a key that contains marked
//! fields is anonymised like any other value. The copy is sized for the
//! source's key count, and hash containers keep the source's hasher. If two
//! keys become equal after anonymisation, the later insertion wins.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use super::{Anonymise, Shape};
use crate::{error::Result, registry::Registry};

impl<K, V, S> Anonymise for HashMap<K, V, S>
where
    K: Anonymise + Eq + Hash,
    V: Anonymise,
    S: BuildHasher + Clone,
{
    const SHAPE: Shape = Shape::Associative;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            let key = key.anonymise_with(registry)?;
            let value = value.anonymise_with(registry)?;
            copy.insert(key, value);
        }
        Ok(copy)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Anonymise for BTreeMap<K, V>
where
    K: Anonymise + Ord,
    V: Anonymise,
{
    const SHAPE: Shape = Shape::Associative;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = BTreeMap::new();
        for (key, value) in self {
            let key = key.anonymise_with(registry)?;
            let value = value.anonymise_with(registry)?;
            copy.insert(key, value);
        }
        Ok(copy)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Anonymise for HashSet<T, S>
where
    T: Anonymise + Eq + Hash,
    S: BuildHasher + Clone,
{
    const SHAPE: Shape = Shape::Associative;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for item in self {
            copy.insert(item.anonymise_with(registry)?);
        }
        Ok(copy)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Anonymise for BTreeSet<T>
where
    T: Anonymise + Ord,
{
    const SHAPE: Shape = Shape::Associative;

    fn anonymise_with(&self, registry: &Registry) -> Result<Self> {
        let mut copy = BTreeSet::new();
        for item in self {
            copy.insert(item.anonymise_with(registry)?);
        }
        Ok(copy)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
