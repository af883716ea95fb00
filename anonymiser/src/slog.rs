//! Adapters for logging anonymised values through `slog`.
//!
//! This module connects [`Anonymise`] with `slog` by providing a
//! `slog::Value` that serializes the anonymised copy of a value as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the anonymised copy, never the
//!   original value.
//! - Avoiding fallible logging APIs: anonymisation and serialization failures
//!   are logged as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or build registries.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{engine::Anonymise, registry::Registry};

/// Logged in place of a value whose anonymisation failed.
pub const ANONYMISE_FAILED: &str = "Failed to anonymise value";

/// Logged in place of a value whose anonymised copy could not be serialized.
pub const SERIALIZE_FAILED: &str = "Failed to serialize anonymised value";

/// A `slog::Value` holding an anonymised payload as JSON.
#[derive(Clone, Debug)]
pub struct AnonymisedJson {
    value: JsonValue,
}

impl AnonymisedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for AnonymisedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their anonymised form.
///
/// ## Example
/// ```ignore
/// use anonymiser::slog::IntoAnonymisedJson;
///
/// info!(logger, "signup"; "user" => user.to_anonymised_json(&registry));
/// ```
pub trait IntoAnonymisedJson: Anonymise + Serialize {
    /// Anonymises `self` with `registry` and captures the copy as JSON.
    ///
    /// On failure the JSON is a string: [`ANONYMISE_FAILED`] or
    /// [`SERIALIZE_FAILED`].
    fn to_anonymised_json(&self, registry: &Registry) -> AnonymisedJson {
        let json = match self.anonymise_with(registry) {
            Ok(copy) => serde_json::to_value(copy)
                .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILED.to_string())),
            Err(_) => JsonValue::String(ANONYMISE_FAILED.to_string()),
        };
        AnonymisedJson::new(json)
    }
}

impl<T> IntoAnonymisedJson for T where T: Anonymise + Serialize {}
