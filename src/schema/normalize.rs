//! Reusable field normalizers
//!
//! These normalizers reshape field values during
//! [`RuleSchema::parse_collection`](crate::schema::RuleSchema), before the
//! validators run.

use anyhow::Result;
use serde_json::{Value, json};

/// Normalizer: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

/// Normalizer: convert string to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.to_lowercase()))
        } else {
            Ok(value)
        }
    }
}

/// Normalizer: round number to specified decimal places
pub fn round_decimals(decimals: u32) -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    move |_: &str, value: Value| {
        if let Some(num) = value.as_f64() {
            let factor = 10_f64.powi(decimals as i32);
            let rounded = (num * factor).round() / factor;
            Ok(json!(rounded))
        } else {
            Ok(value)
        }
    }
}

/// Normalizer: turn a numeric string into a proper number
///
/// Backends that serialize readings as strings (`"20"`) get real numbers on
/// the way in; non-numeric and empty strings pass through untouched.
pub fn coerce_number() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        let coerced = value.as_str().map(str::trim).and_then(|s| {
            if s.is_empty() {
                return None;
            }
            if let Ok(int) = s.parse::<i64>() {
                return Some(json!(int));
            }
            s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| json!(f))
        });
        Ok(coerced.unwrap_or(value))
    }
}
