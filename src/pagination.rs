use serde::Serialize;

/// Default page size used by list endpoints.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Pagination options applied to repository list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

/// A single page of results together with paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items belonging to the current page.
    pub items: Vec<T>,
    /// 1-based page number echoed back to the caller.
    pub page: usize,
    /// Total number of pages available.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wrap a page of items with its metadata.
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
