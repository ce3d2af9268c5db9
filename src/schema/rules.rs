//! Rule-based schema over dynamic records
//!
//! A [`RuleSchema`] describes the wire contract of one table: which backend
//! field names get remapped, how field values are normalized, and which
//! validators each field must satisfy. Parsing a collection applies all
//! three stages per record and collects every violation rather than
//! stopping at the first.

use crate::core::error::{FieldViolation, SchemaViolation};
use crate::core::path::FieldPath;
use crate::schema::RecordSchema;
use anyhow::Result;
use serde_json::Value;
use std::fmt;

type FieldValidator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type FieldNormalizer = Box<dyn Fn(&str, Value) -> Result<Value> + Send + Sync>;

/// Builder-style schema of renames, normalizers, and validators
///
/// # Example
///
/// ```rust,ignore
/// let schema = RuleSchema::new()
///     .rename("sensor_name", "name")
///     .normalize("name", normalize::trim())
///     .rule("name", validators::required())
///     .rule("lastMeasurement.value", validators::numeric());
/// ```
#[derive(Default)]
pub struct RuleSchema {
    renames: Vec<(String, String)>,
    normalizers: Vec<(FieldPath, FieldNormalizer)>,
    validators: Vec<(FieldPath, FieldValidator)>,
}

impl RuleSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remap a top-level backend field name to its front-end name
    ///
    /// Renames run before normalizers and validators, so rules address
    /// fields by their renamed form.
    pub fn rename(mut self, from: &str, to: &str) -> Self {
        self.renames.push((from.to_string(), to.to_string()));
        self
    }

    /// Attach a normalizer to the field at `path`
    ///
    /// Normalizers only run where the path resolves; an absent field is
    /// left for the validators to judge.
    pub fn normalize<F>(mut self, path: &str, normalizer: F) -> Self
    where
        F: Fn(&str, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.normalizers
            .push((FieldPath::from(path), Box::new(normalizer)));
        self
    }

    /// Attach a validator to the field at `path`
    ///
    /// An absent field is validated as null, so `required()` catches it.
    pub fn rule<F>(mut self, path: &str, validator: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators
            .push((FieldPath::from(path), Box::new(validator)));
        self
    }
}

impl fmt::Debug for RuleSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSchema")
            .field("renames", &self.renames)
            .field("normalizers", &self.normalizers.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl RecordSchema<Value> for RuleSchema {
    fn parse_collection(&self, raw: &[Value]) -> Result<Vec<Value>, SchemaViolation> {
        let mut parsed = Vec::with_capacity(raw.len());
        let mut violations = Vec::new();

        for (index, record) in raw.iter().enumerate() {
            if !record.is_object() {
                return Err(SchemaViolation::NotAnObject { index });
            }
            let mut record = record.clone();

            if let Some(map) = record.as_object_mut() {
                for (from, to) in &self.renames {
                    if let Some(moved) = map.remove(from) {
                        map.insert(to.clone(), moved);
                    }
                }
            }

            for (path, normalizer) in &self.normalizers {
                if let Some(slot) = path.lookup_mut(&mut record) {
                    let current = slot.clone();
                    match normalizer(path.as_str(), current) {
                        Ok(normalized) => *slot = normalized,
                        Err(err) => violations.push(FieldViolation {
                            index,
                            field: path.to_string(),
                            message: err.to_string(),
                        }),
                    }
                }
            }

            for (path, validator) in &self.validators {
                let value = path.resolve(&record).cloned().unwrap_or(Value::Null);
                if let Err(message) = validator(path.as_str(), &value) {
                    violations.push(FieldViolation {
                        index,
                        field: path.to_string(),
                        message,
                    });
                }
            }

            parsed.push(record);
        }

        if violations.is_empty() {
            Ok(parsed)
        } else {
            Err(SchemaViolation::FieldErrors(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{normalize, validators};
    use serde_json::json;

    #[test]
    fn test_empty_schema_accepts_any_objects() {
        let schema = RuleSchema::new();
        let raw = vec![json!({"anything": 1}), json!({})];
        assert_eq!(schema.parse_collection(&raw).unwrap(), raw);
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        let schema = RuleSchema::new();
        let raw = vec![json!({"ok": true}), json!([1, 2, 3])];
        let violation = schema.parse_collection(&raw).unwrap_err();
        assert!(matches!(
            violation,
            SchemaViolation::NotAnObject { index: 1 }
        ));
    }

    #[test]
    fn test_rename_remaps_backend_field() {
        let schema = RuleSchema::new().rename("sensor_name", "name");
        let raw = vec![json!({"sensor_name": "Bravo", "id": 1})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0], json!({"name": "Bravo", "id": 1}));
    }

    #[test]
    fn test_rename_missing_source_is_a_noop() {
        let schema = RuleSchema::new().rename("sensor_name", "name");
        let raw = vec![json!({"id": 1})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0], json!({"id": 1}));
    }

    #[test]
    fn test_normalizer_reshapes_nested_field() {
        let schema = RuleSchema::new()
            .normalize("lastMeasurement.value", normalize::coerce_number());
        let raw = vec![json!({"lastMeasurement": {"value": "20"}})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0], json!({"lastMeasurement": {"value": 20}}));
    }

    #[test]
    fn test_normalizer_skips_absent_field() {
        let schema = RuleSchema::new().normalize("name", normalize::trim());
        let raw = vec![json!({"id": 1})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0], json!({"id": 1}));
    }

    #[test]
    fn test_validator_failure_collects_all_violations() {
        let schema = RuleSchema::new()
            .rule("name", validators::required())
            .rule("value", validators::numeric());
        let raw = vec![
            json!({"name": null, "value": "dry"}),
            json!({"name": "ok", "value": 3}),
            json!({"value": 1}),
        ];
        let violation = schema.parse_collection(&raw).unwrap_err();
        let SchemaViolation::FieldErrors(errors) = violation else {
            panic!("expected field errors");
        };
        // record 0 fails both rules, record 2 is missing name
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].index, 0);
        assert_eq!(errors[2].index, 2);
        assert_eq!(errors[2].field, "name");
    }

    #[test]
    fn test_absent_field_validates_as_null() {
        let schema = RuleSchema::new().rule("ranch", validators::required());
        let raw = vec![json!({"id": 1})];
        assert!(schema.parse_collection(&raw).is_err());
    }

    #[test]
    fn test_rename_runs_before_rules() {
        let schema = RuleSchema::new()
            .rename("sensor_name", "name")
            .normalize("name", normalize::trim())
            .rule("name", validators::required());
        let raw = vec![json!({"sensor_name": "  Bravo  "})];
        let parsed = schema.parse_collection(&raw).unwrap();
        assert_eq!(parsed[0], json!({"name": "Bravo"}));
    }

    #[test]
    fn test_successful_parse_leaves_input_untouched() {
        let raw = vec![json!({"sensor_name": "Bravo"})];
        let schema = RuleSchema::new().rename("sensor_name", "name");
        let _ = schema.parse_collection(&raw).unwrap();
        assert_eq!(raw[0], json!({"sensor_name": "Bravo"}));
    }
}
