//! Pagination over processed rows

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

/// Requested page number and size
///
/// Both values have sensible defaults and are clamped on read, so a handler
/// can deserialize them straight out of a query string.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageParams {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub limit: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, clamped to 1..=100
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_LIMIT)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub limit: usize,

    /// Total number of rows (after filter and sort)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}

/// One page of rows plus its metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub meta: PageMeta,
}

impl<T: Clone> Page<T> {
    /// Cut one page out of the processed rows
    ///
    /// An out-of-range page yields an empty page with truthful metadata.
    pub fn slice(rows: &[T], params: &PageParams) -> Self {
        let page = params.page();
        let limit = params.limit();
        let total = rows.len();
        let start = (page - 1).saturating_mul(limit).min(total);
        let end = start.saturating_add(limit).min(total);

        Self {
            rows: rows[start..end].to_vec(),
            meta: PageMeta::new(page, limit, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_page_params_clamping() {
        let params = PageParams::new(0, 1000);
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);
    }

    #[test]
    fn test_page_meta_math() {
        let meta = PageMeta::new(1, 20, 145);
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn test_page_meta_empty_collection() {
        let meta = PageMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_slice_middle_page() {
        let rows: Vec<u32> = (0..10).collect();
        let page = Page::slice(&rows, &PageParams::new(2, 4));
        assert_eq!(page.rows, vec![4, 5, 6, 7]);
        assert!(page.meta.has_prev);
        assert!(page.meta.has_next);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let rows: Vec<u32> = (0..10).collect();
        let page = Page::slice(&rows, &PageParams::new(3, 4));
        assert_eq!(page.rows, vec![8, 9]);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn test_slice_out_of_range_page_is_empty() {
        let rows: Vec<u32> = (0..5).collect();
        let page = Page::slice(&rows, &PageParams::new(9, 4));
        assert!(page.rows.is_empty());
        assert_eq!(page.meta.total, 5);
    }
}
