//! The table view engine: validate → filter → sort
//!
//! [`compute_view`] is the pure pipeline; [`TableView`] is the owned state
//! bundle a host instantiates per table, recomputing the pipeline on every
//! input change. Correctness never depends on the cache: the cached result
//! is always exactly `compute_view` of the current inputs.

pub mod page;

pub use page::{Page, PageMeta, PageParams};

use crate::core::compare::compare_values;
use crate::core::error::SchemaViolation;
use crate::core::path::FieldPath;
use crate::core::record::Record;
use crate::core::search::SearchIntent;
use crate::core::sort::{SortDirection, SortIntent};
use crate::schema::RecordSchema;
use indexmap::IndexSet;

/// Construction defaults for a [`TableView`]
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub default_sort: SortIntent,
    pub search_keys: Vec<FieldPath>,
    pub search_query: String,
}

/// The processed view of one collection
#[derive(Debug, Clone)]
pub struct ViewResult<T> {
    /// The validated, filtered, ordered rows
    pub rows: Vec<T>,
    /// Set when the collection failed its schema and the raw rows are
    /// being served instead
    pub validation_error: Option<SchemaViolation>,
}

impl<T> Default for ViewResult<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            validation_error: None,
        }
    }
}

/// Run the full pipeline over one input snapshot
///
/// 1. **Validate**: absent data yields an empty view. A schema failure is
///    stored, logged, and the raw rows keep flowing unchanged — validation
///    alone never blocks or drops data.
/// 2. **Filter**: an inactive search passes everything through; otherwise
///    records survive when any search key matches.
/// 3. **Sort**: an inactive intent preserves the filtered order
///    element-for-element; an active one orders a fresh copy stably under
///    the comparison policy.
pub fn compute_view<T, S>(
    data: Option<&[T]>,
    schema: &S,
    sort: &SortIntent,
    search: &SearchIntent,
) -> ViewResult<T>
where
    T: Record,
    S: RecordSchema<T>,
{
    let Some(raw) = data else {
        return ViewResult::default();
    };

    let (working, validation_error) = match schema.parse_collection(raw) {
        Ok(parsed) => (parsed, None),
        Err(violation) => {
            tracing::warn!(
                error = %violation,
                rows = raw.len(),
                "collection failed schema validation, serving unvalidated rows"
            );
            (raw.to_vec(), Some(violation))
        }
    };

    let mut rows: Vec<T> = working
        .into_iter()
        .filter(|record| search.matches(record))
        .collect();

    if sort.is_active() {
        let path = FieldPath::new(sort.key.as_str());
        rows.sort_by(|a, b| compare_values(&a.field(&path), &b.field(&path), sort.direction));
    }

    ViewResult {
        rows,
        validation_error,
    }
}

/// Per-table view state: one instance per table on screen
///
/// All mutators are synchronous and side-effect-free beyond updating the
/// stored intent and recomputing the pipeline. Instances share nothing.
pub struct TableView<T: Record, S: RecordSchema<T>> {
    data: Option<Vec<T>>,
    schema: S,
    sort: SortIntent,
    search: SearchIntent,
    cached: ViewResult<T>,
}

impl<T: Record, S: RecordSchema<T>> TableView<T, S> {
    /// Create a view with no data and no default intents
    pub fn new(schema: S) -> Self {
        Self::with_options(schema, ViewOptions::default())
    }

    /// Create a view with construction defaults
    pub fn with_options(schema: S, options: ViewOptions) -> Self {
        let mut view = Self {
            data: None,
            schema,
            sort: options.default_sort,
            search: SearchIntent::new(options.search_query, options.search_keys),
            cached: ViewResult::default(),
        };
        view.refresh();
        view
    }

    /// Supply a new raw snapshot (`None` while loading)
    ///
    /// The previous snapshot's validation outcome carries no memory into
    /// the new one.
    pub fn set_data(&mut self, data: Option<Vec<T>>) {
        self.data = data;
        self.refresh();
    }

    /// The fully processed (validated → filtered → sorted) rows
    pub fn rows(&self) -> &[T] {
        &self.cached.rows
    }

    /// Consume the view, keeping the processed rows
    pub fn into_rows(self) -> Vec<T> {
        self.cached.rows
    }

    /// The violation from the last recomputation, if any
    pub fn validation_error(&self) -> Option<&SchemaViolation> {
        self.cached.validation_error.as_ref()
    }

    pub fn sort_intent(&self) -> &SortIntent {
        &self.sort
    }

    /// Cycle the sort state for `key` (see [`SortIntent::toggle`])
    pub fn request_sort(&mut self, key: &str) {
        self.sort.toggle(key);
        tracing::debug!(key = %self.sort.key, direction = ?self.sort.direction, "sort intent updated");
        self.refresh();
    }

    /// The direction currently applied to `key`
    pub fn sort_direction(&self, key: &str) -> SortDirection {
        self.sort.direction_for(key)
    }

    pub fn search_query(&self) -> &str {
        &self.search.query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
        self.refresh();
    }

    pub fn search_keys(&self) -> &IndexSet<FieldPath> {
        &self.search.keys
    }

    pub fn set_search_keys(&mut self, keys: impl IntoIterator<Item = impl Into<FieldPath>>) {
        self.search.keys = keys.into_iter().map(Into::into).collect();
        self.refresh();
    }

    /// One page of the processed rows
    pub fn page(&self, params: &PageParams) -> Page<T> {
        Page::slice(self.rows(), params)
    }

    fn refresh(&mut self) {
        self.cached = compute_view(self.data.as_deref(), &self.schema, &self.sort, &self.search);
    }
}
