//! Search intent: a query matched across an ordered set of field paths

use crate::core::path::FieldPath;
use crate::core::record::Record;
use indexmap::IndexSet;

/// The currently active query string and the fields it is matched against
///
/// Matching is case-insensitive substring containment, OR-ed across the
/// keys. An intent with an empty query or an empty key set is inactive and
/// lets every record through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIntent {
    pub query: String,
    pub keys: IndexSet<FieldPath>,
}

impl SearchIntent {
    pub fn new(
        query: impl Into<String>,
        keys: impl IntoIterator<Item = impl Into<FieldPath>>,
    ) -> Self {
        Self {
            query: query.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() && !self.keys.is_empty()
    }

    /// Whether `record` passes this search
    ///
    /// A key resolving to null is a non-match for that key, not an error.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        if !self.is_active() {
            return true;
        }
        let needle = self.query.to_lowercase();
        self.keys.iter().any(|key| {
            let value = record.field(key);
            !value.is_null() && value.display().to_lowercase().contains(&needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_matches_everything() {
        let intent = SearchIntent::new("", ["name"]);
        assert!(intent.matches(&json!({"name": "Bravo"})));
        assert!(intent.matches(&json!({})));
    }

    #[test]
    fn test_empty_keys_match_everything() {
        let intent = SearchIntent::new("zzz", Vec::<FieldPath>::new());
        assert!(intent.matches(&json!({"name": "Bravo"})));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let intent = SearchIntent::new("AB", ["name"]);
        assert!(intent.matches(&json!({"name": "crab apple"})));
        assert!(intent.matches(&json!({"name": "ABBA"})));
        assert!(!intent.matches(&json!({"name": "orchard"})));
    }

    #[test]
    fn test_match_is_or_across_keys() {
        let intent = SearchIntent::new("ab", ["name", "id"]);
        assert!(intent.matches(&json!({"name": "zzz", "id": "AB-1"})));
        assert!(intent.matches(&json!({"name": "cabin", "id": "zzz"})));
        assert!(!intent.matches(&json!({"name": "zzz", "id": "zzz"})));
    }

    #[test]
    fn test_null_key_is_a_non_match() {
        let intent = SearchIntent::new("ab", ["name"]);
        assert!(!intent.matches(&json!({"name": null})));
        assert!(!intent.matches(&json!({})));
    }

    #[test]
    fn test_numeric_field_matches_by_string_form() {
        let intent = SearchIntent::new("12", ["id"]);
        assert!(intent.matches(&json!({"id": 3120})));
        assert!(!intent.matches(&json!({"id": 45})));
    }

    #[test]
    fn test_nested_key_matching() {
        let intent = SearchIntent::new("north", ["station.name"]);
        assert!(intent.matches(&json!({"station": {"name": "North Ridge"}})));
        assert!(!intent.matches(&json!({"station": {"name": "South Draw"}})));
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let intent = SearchIntent::new("x", ["name", "name"]);
        assert_eq!(intent.keys.len(), 1);
    }
}
