//! Typed schema-violation errors
//!
//! A violation is never thrown across the view-engine boundary: the engine
//! stores it, keeps serving the unvalidated rows, and lets the host decide
//! whether to render a warning.

use serde::Serialize;
use std::fmt;

/// A single field validation failure inside a collection
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    /// Index of the offending record within the collection
    pub index: usize,
    /// Dotted path of the offending field
    pub field: String,
    /// Human-readable message from the validator
    pub message: String,
}

/// Why a collection failed its schema
#[derive(Debug, Clone)]
pub enum SchemaViolation {
    /// A record could not be decoded into the expected shape
    RecordDecode { index: usize, message: String },

    /// A record is not a JSON object where one was required
    NotAnObject { index: usize },

    /// One or more field validators rejected their values
    FieldErrors(Vec<FieldViolation>),
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::RecordDecode { index, message } => {
                write!(f, "record {} failed to decode: {}", index, message)
            }
            SchemaViolation::NotAnObject { index } => {
                write!(f, "record {} is not an object", index)
            }
            SchemaViolation::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("[{}] {}: {}", e.index, e.field, e.message))
                    .collect();
                write!(f, "field validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for SchemaViolation {}

impl SchemaViolation {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SchemaViolation::RecordDecode { .. } => "RECORD_DECODE_ERROR",
            SchemaViolation::NotAnObject { .. } => "RECORD_NOT_AN_OBJECT",
            SchemaViolation::FieldErrors(_) => "FIELD_VALIDATION_ERRORS",
        }
    }

    /// Structured details suitable for a warning banner or log payload
    pub fn details(&self) -> serde_json::Value {
        match self {
            SchemaViolation::RecordDecode { index, message } => serde_json::json!({
                "index": index,
                "message": message,
            }),
            SchemaViolation::NotAnObject { index } => serde_json::json!({ "index": index }),
            SchemaViolation::FieldErrors(errors) => serde_json::json!({ "fields": errors }),
        }
    }
}
