use crate::shared::validations::validate_pagination;

/// Pagination query parameters (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl PaginationParams {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let (page, limit) = validate_pagination(page, limit);
        Self { page, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(Some(1), Some(limit))
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.limit as usize
    }

    /// Cut the requested page out of an already ordered list.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// `None` selects every row.
pub fn paginate<T>(items: Vec<T>, page: Option<PaginationParams>) -> Vec<T> {
    match page {
        Some(params) => params.apply(items),
        None => items,
    }
}
