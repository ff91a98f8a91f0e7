//! Key-value persistence boundary
//!
//! Kernels describe themselves as a flat set of named parameters. Any storage
//! backend that can hold scalars, vectors, counts and strings under string
//! keys can save and restore them; [`MemoryStore`] is the in-process adapter
//! and doubles as a JSON document through serde.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which every kernel stores its class name
pub const CLASS_KEY: &str = "class";

/// A primitive value held by a parameter store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Scalar(f64),
    Vector(Vec<f64>),
    Count(usize),
    Text(String),
}

impl ParameterValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Count(_) => "count",
            Self::Text(_) => "text",
        }
    }
}

/// Storage adapter for kernel parameters
///
/// Keys are independent: the order of `save` calls carries no meaning and
/// saving an existing key replaces its value.
pub trait ParameterStore {
    /// Store a value under `key`
    fn save(&mut self, key: &str, value: ParameterValue);

    /// Fetch the value stored under `key`
    fn load(&self, key: &str) -> Result<ParameterValue>;

    /// Fetch a scalar
    fn load_scalar(&self, key: &str) -> Result<f64> {
        match self.load(key)? {
            ParameterValue::Scalar(value) => Ok(value),
            other => Err(type_mismatch(key, "scalar", &other)),
        }
    }

    /// Fetch a vector
    fn load_vector(&self, key: &str) -> Result<Vec<f64>> {
        match self.load(key)? {
            ParameterValue::Vector(values) => Ok(values),
            other => Err(type_mismatch(key, "vector", &other)),
        }
    }

    /// Fetch a count
    fn load_count(&self, key: &str) -> Result<usize> {
        match self.load(key)? {
            ParameterValue::Count(value) => Ok(value),
            other => Err(type_mismatch(key, "count", &other)),
        }
    }

    /// Fetch a string
    fn load_text(&self, key: &str) -> Result<String> {
        match self.load(key)? {
            ParameterValue::Text(value) => Ok(value),
            other => Err(type_mismatch(key, "text", &other)),
        }
    }
}

fn type_mismatch(key: &str, expected: &'static str, found: &ParameterValue) -> Error {
    Error::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}

/// In-memory parameter store with a JSON representation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    entries: BTreeMap<String, ParameterValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored keys in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Encode the store as a JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a store from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ParameterStore for MemoryStore {
    fn save(&mut self, key: &str, value: ParameterValue) {
        self.entries.insert(key.to_string(), value);
    }

    fn load(&self, key: &str) -> Result<ParameterValue> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }
}
