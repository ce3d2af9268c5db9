//! # Sift
//!
//! A table-view engine for data-driven dashboards: give it a raw collection
//! of records, a validation contract, and user-driven sort/search intents,
//! and it produces a validated, filtered, ordered view of the records.
//!
//! ## Features
//!
//! - **Validate-then-serve**: collections are checked against a pluggable
//!   schema; on failure the raw rows keep flowing and the violation is
//!   surfaced for the host to display
//! - **Tri-state sorting**: ascending → descending → unsorted cycling per
//!   column, with nulls always sorted last
//! - **Type-aware comparison**: numeric, then chronological, then
//!   case-insensitive lexicographic
//! - **Nested keys**: dotted paths like `lastMeasurement.timestamp` resolve
//!   through the record graph without ever panicking
//! - **Search across keys**: case-insensitive substring matching over an
//!   ordered set of field paths
//! - **Configuration-Based**: per-table defaults (sort, search keys, page
//!   size) loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sift::prelude::*;
//!
//! let schema = RuleSchema::new()
//!     .rename("sensor_name", "name")
//!     .rule("name", validators::required())
//!     .rule("lastMeasurement.value", validators::numeric());
//!
//! let mut view = TableView::new(schema);
//! view.set_data(Some(fetch_sensors()));
//!
//! view.request_sort("lastMeasurement.value"); // ascending
//! view.set_search_keys(["name", "ranch"]);
//! view.set_search_query("north");
//!
//! for row in view.rows() {
//!     render(row);
//! }
//! if let Some(violation) = view.validation_error() {
//!     warn_banner(violation);
//! }
//! ```

pub mod config;
pub mod core;
pub mod schema;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        compare::compare_values,
        error::{FieldViolation, SchemaViolation},
        field::{FieldFormat, FieldValue},
        path::FieldPath,
        record::Record,
        search::SearchIntent,
        sort::{SortDirection, SortIntent},
    };

    // === Schemas ===
    pub use crate::schema::{
        RecordSchema, Unchecked, normalize, rules::RuleSchema, typed::TypedSchema, validators,
    };

    // === View Engine ===
    pub use crate::view::{
        Page, PageMeta, PageParams, TableView, ViewOptions, ViewResult, compute_view,
    };

    // === Config ===
    pub use crate::config::{TablesConfig, ViewConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
