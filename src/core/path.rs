//! Dotted field paths and nested key resolution

use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A dotted path addressing a (possibly nested) field inside a record
///
/// `"name"` looks up directly on the record root; `"lastMeasurement.value"`
/// walks one level down. Numeric segments index into arrays. Resolution
/// never panics: a missing or non-container step yields an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `.`-separated segments of the path, in walk order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Walk the record graph, returning the addressed value if every step
    /// lands on a container that has the next segment
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in self.segments() {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Resolve to a [`FieldValue`], with absence collapsing to `Null`
    pub fn value(&self, root: &Value) -> FieldValue {
        self.resolve(root)
            .map(FieldValue::from)
            .unwrap_or(FieldValue::Null)
    }

    /// Mutable variant of [`resolve`](Self::resolve), used by schema
    /// normalizers to rewrite fields in place
    pub fn lookup_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        let mut current = root;
        for segment in self.segments() {
            current = match current {
                Value::Object(map) => map.get_mut(segment)?,
                Value::Array(items) => {
                    let index = segment.parse::<usize>().ok()?;
                    items.get_mut(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
