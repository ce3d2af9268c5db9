//! Pairwise value comparison policy for sorting

use crate::core::field::FieldValue;
use crate::core::sort::SortDirection;
use std::cmp::Ordering;

/// Compare two resolved field values under a sort direction
///
/// Nulls-last is absolute: a null value sorts after a present one no matter
/// the requested direction, and two nulls compare equal. The direction only
/// flips the outcome of a comparison between two present values.
pub fn compare_values(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = compare_present(a, b);
            if direction == SortDirection::Descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

/// Comparison of two present values: numeric, then chronological, then
/// case-insensitive lexicographic
fn compare_present(a: &FieldValue, b: &FieldValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        // finite by construction
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    if let (Some(x), Some(y)) = (a.as_instant(), b.as_instant()) {
        return x.cmp(&y);
    }
    a.display().to_lowercase().cmp(&b.display().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> FieldValue {
        FieldValue::String(v.to_string())
    }

    #[test]
    fn test_nulls_sort_last_ascending() {
        assert_eq!(
            compare_values(&FieldValue::Null, &s("a"), SortDirection::Ascending),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&s("a"), &FieldValue::Null, SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_nulls_sort_last_descending_too() {
        assert_eq!(
            compare_values(&FieldValue::Null, &s("a"), SortDirection::Descending),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&s("a"), &FieldValue::Null, SortDirection::Descending),
            Ordering::Less
        );
    }

    #[test]
    fn test_two_nulls_compare_equal() {
        assert_eq!(
            compare_values(&FieldValue::Null, &FieldValue::Null, SortDirection::Ascending),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numeric_strings_compare_numerically() {
        // "10" > "9" numerically even though "10" < "9" lexicographically
        assert_eq!(
            compare_values(&s("10"), &s("9"), SortDirection::Ascending),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&s("2"), &s("10"), SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_number_and_numeric_string() {
        assert_eq!(
            compare_values(&FieldValue::Integer(5), &s("20"), SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_zero_compares_as_present_number() {
        assert_eq!(
            compare_values(&FieldValue::Integer(0), &s("1"), SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&FieldValue::Integer(0), &FieldValue::Null, SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        assert_eq!(
            compare_values(
                &s("2024-01-15"),
                &s("2024-02-01T00:00:00Z"),
                SortDirection::Ascending
            ),
            Ordering::Less
        );
    }

    #[test]
    fn test_strings_compare_case_insensitively() {
        assert_eq!(
            compare_values(&s("alpha"), &s("Bravo"), SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&s("ALPHA"), &s("alpha"), SortDirection::Ascending),
            Ordering::Equal
        );
    }

    #[test]
    fn test_descending_flips_present_comparison() {
        assert_eq!(
            compare_values(&s("alpha"), &s("bravo"), SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn test_non_numeric_pair_falls_back_to_string() {
        // one side numeric, the other not: both compared as strings
        assert_eq!(
            compare_values(&s("10"), &s("alpha"), SortDirection::Ascending),
            Ordering::Less
        );
    }
}
