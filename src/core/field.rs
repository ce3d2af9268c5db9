//! Field value types, coercions, and format validation

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use uuid::Uuid;

/// A polymorphic field value resolved out of a record
///
/// This is the unit the comparison and search policies operate on. Arrays
/// and objects degrade to their compact JSON string form when resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::String(n.to_string())
                }
            }
            Value::String(s) => FieldValue::String(s.clone()),
            other => FieldValue::String(other.to_string()),
        }
    }
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Coerce the value into a finite number if possible
    ///
    /// Integers, finite floats, booleans (false = 0, true = 1), and strings
    /// that parse to a finite f64 are numeric. Empty or whitespace-only
    /// strings are not; a literal `0` or `"0"` is a present numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) if f.is_finite() => Some(*f),
            FieldValue::Float(_) => None,
            FieldValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
            }
            FieldValue::Null => None,
        }
    }

    /// Parse the value as a calendar instant if possible
    ///
    /// Accepts RFC 3339 strings, naive `%Y-%m-%d %H:%M:%S` datetimes, and
    /// plain `%Y-%m-%d` dates (taken at midnight UTC).
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        let FieldValue::String(s) = self else {
            return None;
        };
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
        None
    }

    /// String form used for search matching and lexicographic comparison
    ///
    /// Null displays as the empty string.
    pub fn display(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Null => String::new(),
        }
    }
}

/// Field format validators for automatic validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Uuid,
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Check a candidate string against this format
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(candidate),
            FieldFormat::Uuid => Uuid::parse_str(candidate).is_ok(),
            FieldFormat::Url => Self::is_valid_url(candidate),
            FieldFormat::Custom(regex) => regex.is_match(candidate),
        }
    }

    /// Validate a field value against this format
    ///
    /// Non-string values never match.
    pub fn validate(&self, value: &FieldValue) -> bool {
        match value.as_string() {
            Some(s) => self.matches(s),
            None => false,
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}
