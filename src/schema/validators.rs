//! Reusable field validators
//!
//! These validators are combined by [`RuleSchema`](crate::schema::RuleSchema)
//! to check fields across a collection. A validator only judges the kinds of
//! values it understands and passes everything else through, so rules
//! compose: pair `required()` with a type-specific check.

use crate::core::field::{FieldFormat, FieldValue};
use serde_json::Value;

/// Validator: field is required (not null, not absent)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("field '{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: field is optional (always valid)
pub fn optional() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |_: &str, _: &Value| Ok(())
}

/// Validator: value must coerce to a finite number
///
/// Accepts numbers and numeric strings (telemetry readings often arrive as
/// strings); null passes through so `required()` stays in charge of absence.
pub fn numeric() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        match FieldValue::from(value).as_number() {
            Some(_) => Ok(()),
            None => Err(format!("field '{}' must be numeric (value: {})", field, value)),
        }
    }
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 {
                Err(format!("field '{}' must be positive (value: {})", field, num))
            } else {
                Ok(())
            }
        } else {
            Ok(()) // not a number, another validator's problem
        }
    }
}

/// Validator: number must be within an inclusive range
pub fn range(min: f64, max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num < min || num > max {
                Err(format!(
                    "field '{}' must be between {} and {} (value: {})",
                    field, min, max, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string length must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.len();
            if len < min {
                Err(format!(
                    "field '{}' must be at least {} characters (currently: {})",
                    field, min, len
                ))
            } else if len > max {
                Err(format!(
                    "field '{}' must not exceed {} characters (currently: {})",
                    field, max, len
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !allowed.contains(&s.to_string()) {
                Err(format!(
                    "field '{}' must be one of {:?} (value: {})",
                    field, allowed, s
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match a [`FieldFormat`]
pub fn matches_format(
    format: FieldFormat,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if format.matches(s) {
                Ok(())
            } else {
                Err(format!(
                    "field '{}' does not match the {:?} format (value: {})",
                    field, format, s
                ))
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must parse as a calendar instant
///
/// Accepts the same forms as [`FieldValue::as_instant`]: RFC 3339, naive
/// datetime, or plain date.
pub fn timestamp() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if FieldValue::String(s.to_string()).as_instant().is_some() {
                Ok(())
            } else {
                Err(format!(
                    "field '{}' must be a timestamp (value: {})",
                    field, s
                ))
            }
        } else {
            Ok(())
        }
    }
}
