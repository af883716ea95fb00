//! Named transformation functions.
//!
//! A [`Registry`] maps marker names (the string in `#[anonymise("name")]`) to
//! transformation functions. Each function is stored type-erased together with
//! the name of the type it accepts; the match against the decorated field's
//! type is checked when the marker is applied, not when it is registered.
//!
//! The registry is an ordinary value: build it once, then pass it by reference
//! to every [`anonymise`](crate::anonymise) call. It is never mutated during a
//! traversal and can be shared across threads.

use std::{
    any::{type_name, Any},
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

use crate::{
    engine::{self, Anonymise},
    error::{Error, Result},
};

type Transformer<T> = Arc<dyn Fn(&T) -> T + Send + Sync>;

/// A registered transformer plus the type it was registered for.
#[derive(Clone)]
struct Entry {
    transformer: Arc<dyn Any + Send + Sync>,
    accepts: &'static str,
}

impl Entry {
    fn new<T, F>(transformer: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        let transformer: Transformer<T> = Arc::new(transformer);
        Self {
            transformer: Arc::new(transformer),
            accepts: type_name::<T>(),
        }
    }

    fn downcast<T: 'static>(&self) -> Option<&Transformer<T>> {
        self.transformer.downcast_ref::<Transformer<T>>()
    }
}

/// Mapping from marker name to transformation function.
///
/// ```rust
/// use anonymiser::{transformers, Registry};
///
/// let registry = Registry::builder()
///     .transformer("name", transformers::constant("redacted".to_string()))
///     .transformer("age", |age: &u32| age / 10 * 10)
///     .build()
///     .unwrap();
///
/// assert!(registry.contains("name"));
/// assert_eq!(registry.apply("age", &37_u32).unwrap(), 30);
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a chained registry definition.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registers `transformer` under `marker`.
    ///
    /// Fails with [`Error::EmptyMarker`] for an empty name and
    /// [`Error::DuplicateTransformer`] if the name is already taken.
    pub fn register<T, F>(&mut self, marker: impl Into<String>, transformer: F) -> Result<()>
    where
        T: 'static,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(Error::EmptyMarker);
        }
        if self.entries.contains_key(&marker) {
            return Err(Error::DuplicateTransformer(marker));
        }
        self.entries.insert(marker, Entry::new(transformer));
        Ok(())
    }

    /// Returns `true` if a transformer is registered under `marker`.
    pub fn contains(&self, marker: &str) -> bool {
        self.entries.contains_key(marker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered marker names, sorted.
    pub fn markers(&self) -> Vec<&str> {
        let mut markers: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        markers.sort_unstable();
        markers
    }

    /// Looks up `marker` and invokes it on `value`.
    ///
    /// This is the step derived code runs for every marked field.
    pub fn apply<T: 'static>(&self, marker: &str, value: &T) -> Result<T> {
        let entry = self
            .entries
            .get(marker)
            .ok_or_else(|| Error::MissingTransformer(marker.to_string()))?;
        let transformer = entry
            .downcast::<T>()
            .ok_or_else(|| Error::TransformerTypeMismatch {
                marker: marker.to_string(),
                expected: type_name::<T>(),
                registered: entry.accepts,
            })?;
        Ok(transformer(value))
    }

    /// Produces an anonymised copy of `value` using this registry.
    pub fn anonymise<T: Anonymise>(&self, value: &T) -> Result<T> {
        engine::anonymise(self, value)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(marker, entry)| (marker.as_str(), entry.accepts))
            .collect();
        f.debug_struct("Registry")
            .field("transformers", &entries)
            .finish()
    }
}

/// Chained construction of a [`Registry`].
///
/// The first registration error is kept and reported by [`build`](Self::build).
#[derive(Default)]
#[must_use]
pub struct RegistryBuilder {
    registry: Registry,
    error: Option<Error>,
}

impl RegistryBuilder {
    /// Adds `transformer` under `marker`.
    pub fn transformer<T, F>(mut self, marker: impl Into<String>, transformer: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        if self.error.is_none() {
            if let Err(err) = self.registry.register(marker, transformer) {
                self.error = Some(err);
            }
        }
        self
    }

    pub fn build(self) -> Result<Registry> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.registry),
        }
    }
}
