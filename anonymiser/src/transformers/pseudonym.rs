//! Deterministic keyed pseudonyms for text fields.

use std::{borrow::Cow, fmt};

use sha2::{Digest, Sha256};

const DEFAULT_LENGTH: usize = 16;
const MAX_LENGTH: usize = 64;

/// Replaces text with a stable pseudonym derived from a secret salt.
///
/// The pseudonym is the hex SHA-256 digest of the salt and the value,
/// truncated to a fixed length and optionally prefixed. The same value and salt
/// always produce the same pseudonym, so records can still be joined on a
/// pseudonymised field.
///
/// ```rust
/// use anonymiser::transformers::Pseudonymiser;
///
/// let pseudonymiser = Pseudonymiser::new("pepper").with_prefix("user-");
/// let first = pseudonymiser.pseudonym("alice");
/// assert!(first.starts_with("user-"));
/// assert_eq!(first, pseudonymiser.pseudonym("alice"));
/// assert_ne!(first, pseudonymiser.pseudonym("bob"));
/// ```
#[derive(Clone)]
pub struct Pseudonymiser {
    salt: Vec<u8>,
    length: usize,
    prefix: Cow<'static, str>,
}

impl Pseudonymiser {
    #[must_use]
    pub fn new(salt: impl AsRef<[u8]>) -> Self {
        Self {
            salt: salt.as_ref().to_vec(),
            length: DEFAULT_LENGTH,
            prefix: Cow::Borrowed(""),
        }
    }

    /// Sets the number of hex digits kept, clamped to `1..=64`.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.clamp(1, MAX_LENGTH);
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the pseudonym for `value`.
    #[must_use]
    pub fn pseudonym(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        // Length-prefix the salt so salt/value boundaries cannot shift.
        hasher.update((self.salt.len() as u64).to_le_bytes());
        hasher.update(&self.salt);
        hasher.update(value.as_bytes());
        let digest = hex::encode(hasher.finalize());
        format!("{}{}", self.prefix, &digest[..self.length])
    }

    /// Wraps the pseudonymiser as a `String` transformer for a registry.
    pub fn transformer(self) -> impl Fn(&String) -> String + Send + Sync + 'static {
        move |value: &String| self.pseudonym(value)
    }
}

impl fmt::Debug for Pseudonymiser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pseudonymiser")
            .field("salt", &"[REDACTED]")
            .field("length", &self.length)
            .field("prefix", &self.prefix)
            .finish()
    }
}
