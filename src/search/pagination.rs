use serde::{Deserialize, Serialize};

/// Client-side paging over an already fetched result set. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Zero when there is nothing to show
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Move to `page`, clamped into the valid range for `total` items.
    /// Returns the page actually selected.
    pub fn set_page(&mut self, page: usize, total: usize) -> usize {
        let last = self.page_count(total).max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Zero-based index range of the current page within `total` items
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
