//! Pluggable validation contracts for record collections
//!
//! The view engine only depends on the [`RecordSchema`] capability, not on
//! any particular validation mechanism. This module ships three: a
//! rule-based schema over dynamic records ([`RuleSchema`]), a serde
//! round-trip schema ([`TypedSchema`]), and a pass-through ([`Unchecked`]).

pub mod normalize;
pub mod rules;
pub mod typed;
pub mod validators;

pub use rules::RuleSchema;
pub use typed::TypedSchema;

use crate::core::error::SchemaViolation;

/// A parse/validate contract for a collection of records
///
/// On success the returned collection (possibly reshaped or normalized)
/// becomes the view's working set. On failure the violation describes what
/// went wrong; the engine then falls back to the raw input.
pub trait RecordSchema<T> {
    fn parse_collection(&self, raw: &[T]) -> Result<Vec<T>, SchemaViolation>;
}

/// Schema that accepts any collection unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchecked;

impl<T: Clone> RecordSchema<T> for Unchecked {
    fn parse_collection(&self, raw: &[T]) -> Result<Vec<T>, SchemaViolation> {
        Ok(raw.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unchecked_passes_everything_through() {
        let raw = vec![json!({"a": 1}), json!("not even an object")];
        let parsed = Unchecked.parse_collection(&raw).unwrap();
        assert_eq!(parsed, raw);
    }
}
