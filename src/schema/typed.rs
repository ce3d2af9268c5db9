//! Serde round-trip schema
//!
//! Validates dynamic records by deserializing each one into a typed struct
//! and re-serializing the result, so the working set carries the typed
//! shape (defaults filled, unknown fields handled per the struct's serde
//! attributes).

use crate::core::error::SchemaViolation;
use crate::schema::RecordSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Schema that accepts exactly the collections decoding into `Vec<U>`
pub struct TypedSchema<U> {
    marker: PhantomData<U>,
}

impl<U> TypedSchema<U> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<U> Default for TypedSchema<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for TypedSchema<U> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<U> fmt::Debug for TypedSchema<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedSchema<{}>", std::any::type_name::<U>())
    }
}

impl<U> RecordSchema<Value> for TypedSchema<U>
where
    U: DeserializeOwned + Serialize,
{
    fn parse_collection(&self, raw: &[Value]) -> Result<Vec<Value>, SchemaViolation> {
        raw.iter()
            .enumerate()
            .map(|(index, value)| {
                let typed: U = serde_json::from_value(value.clone()).map_err(|err| {
                    SchemaViolation::RecordDecode {
                        index,
                        message: err.to_string(),
                    }
                })?;
                serde_json::to_value(&typed).map_err(|err| SchemaViolation::RecordDecode {
                    index,
                    message: err.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Sensor {
        id: u32,
        name: String,
        #[serde(default)]
        ranch: Option<String>,
    }

    #[test]
    fn test_conforming_collection_round_trips() {
        let schema = TypedSchema::<Sensor>::new();
        let raw = vec![json!({"id": 1, "name": "Bravo", "ranch": "North"})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0]["name"], "Bravo");
    }

    #[test]
    fn test_round_trip_fills_defaults() {
        let schema = TypedSchema::<Sensor>::new();
        let raw = vec![json!({"id": 1, "name": "Bravo"})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0]["ranch"], json!(null));
    }

    #[test]
    fn test_missing_required_field_reports_index() {
        let schema = TypedSchema::<Sensor>::new();
        let raw = vec![json!({"id": 1, "name": "ok"}), json!({"id": 2})];
        let violation = schema.parse_collection(&raw).unwrap_err();
        let SchemaViolation::RecordDecode { index, message } = violation else {
            panic!("expected decode violation");
        };
        assert_eq!(index, 1);
        assert!(message.contains("name"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let schema = TypedSchema::<Sensor>::new();
        let raw = vec![json!({"id": "not-a-number", "name": "x"})];
        assert!(schema.parse_collection(&raw).is_err());
    }
}
