//! Serializer configuration shared by the request executor and the error
//! classifier.
//!
//! [`JsonOptions::web`] mirrors the service's expectations on the way in:
//! struct fields are matched case-insensitively and numeric fields accept
//! numbers written as strings. Keys of free-form objects are left alone.

pub mod lenient;

use crate::error::ReadyClientError;

use lenient::{Leniency, LenientValue};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Rewrites a JSON tree before decoding or after encoding.
///
/// Converters run in registration order. On decode they see the tree as
/// received, before any lenient field matching.
pub trait ValueConverter: Send + Sync {
    fn name(&self) -> &str;

    fn read(&self, _value: &mut Value) {}

    fn write(&self, _value: &mut Value) {}
}

/// Serializer configuration.
///
/// Value formats tied to a field (string-backed enums, description and
/// display-name enums, `yyyy-MM-dd` dates) are serde adapters in
/// [`common::converters`], attached on the model with
/// `#[serde(with = "...")]`. Register a [`ValueConverter`] only for
/// rewrites that cut across types.
#[derive(Clone)]
pub struct JsonOptions {
    case_insensitive: bool,
    numbers_from_strings: bool,
    converters: Vec<Arc<dyn ValueConverter>>,
}

impl JsonOptions {
    /// Case-insensitive property matching and numbers read from strings,
    /// no extra converters.
    pub fn web() -> Self {
        Self {
            case_insensitive: true,
            numbers_from_strings: true,
            converters: Vec::new(),
        }
    }

    /// Property names must match exactly and numbers must be JSON numbers.
    pub fn strict() -> Self {
        Self {
            case_insensitive: false,
            numbers_from_strings: false,
            converters: Vec::new(),
        }
    }

    pub fn with_converter<C>(mut self, converter: C) -> Self
    where
        C: ValueConverter + 'static,
    {
        self.converters.push(Arc::new(converter));
        self
    }

    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn with_numbers_from_strings(mut self, enabled: bool) -> Self {
        self.numbers_from_strings = enabled;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn reads_numbers_from_strings(&self) -> bool {
        self.numbers_from_strings
    }

    fn leniency(&self) -> Leniency {
        Leniency {
            case_insensitive: self.case_insensitive,
            numbers_from_strings: self.numbers_from_strings,
        }
    }

    pub fn converter_names(&self) -> Vec<&str> {
        self.converters.iter().map(|converter| converter.name()).collect()
    }

    pub fn encode<T>(&self, value: &T) -> Result<Vec<u8>, ReadyClientError>
    where
        T: Serialize + ?Sized,
    {
        let mut tree =
            serde_json::to_value(value).map_err(|e| ReadyClientError::serialization(e))?;

        for converter in &self.converters {
            converter.write(&mut tree);
        }

        serde_json::to_vec(&tree).map_err(|e| ReadyClientError::serialization(e))
    }

    /// Decodes `text` into `T`. A blank body decodes as `null`, so an
    /// `Option<T>` target observes it as `None`.
    pub fn decode<T>(&self, text: &str) -> Result<T, ReadyClientError>
    where
        T: DeserializeOwned,
    {
        let mut tree = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text)?
        };

        for converter in &self.converters {
            converter.read(&mut tree);
        }

        let leniency = self.leniency();
        if leniency.is_relaxed() {
            Ok(T::deserialize(LenientValue::new(tree, leniency))?)
        } else {
            Ok(serde_json::from_value(tree)?)
        }
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self::web()
    }
}

impl fmt::Debug for JsonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonOptions")
            .field("case_insensitive", &self.case_insensitive)
            .field("numbers_from_strings", &self.numbers_from_strings)
            .field("converters", &self.converter_names())
            .finish()
    }
}
