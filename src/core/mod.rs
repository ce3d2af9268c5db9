//! Core module containing the field, path, sort, search, and comparison primitives

pub mod compare;
pub mod error;
pub mod field;
pub mod path;
pub mod record;
pub mod search;
pub mod sort;

pub use compare::compare_values;
pub use error::{FieldViolation, SchemaViolation};
pub use field::{FieldFormat, FieldValue};
pub use path::FieldPath;
pub use record::Record;
pub use search::SearchIntent;
pub use sort::{SortDirection, SortIntent};
