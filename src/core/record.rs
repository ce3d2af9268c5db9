//! The record seam between the view engine and host data

use crate::core::field::FieldValue;
use crate::core::path::FieldPath;
use serde_json::Value;

/// A row the view engine can search and sort
///
/// The engine only ever asks a record for the value at a dotted path; it
/// has no opinion on where the record came from. Dynamic JSON documents
/// implement this out of the box. Typed hosts can implement it directly to
/// avoid going through `serde_json::Value`.
pub trait Record: Clone {
    /// Resolve the value at `path`, with absence collapsing to `Null`
    fn field(&self, path: &FieldPath) -> FieldValue;
}

impl Record for Value {
    fn field(&self, path: &FieldPath) -> FieldValue {
        path.value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_record_resolves_nested_path() {
        let record = json!({"station": {"name": "North Ridge"}});
        assert_eq!(
            record.field(&FieldPath::from("station.name")),
            FieldValue::String("North Ridge".into())
        );
    }

    #[test]
    fn test_value_record_missing_path_is_null() {
        let record = json!({"id": 1});
        assert!(record.field(&FieldPath::from("station.name")).is_null());
    }
}
