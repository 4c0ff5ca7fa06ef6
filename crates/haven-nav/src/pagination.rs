//! Client-side page math for list views.

use crate::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// 1-based page cursor over `total` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
            total: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Never zero: an empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.set_page(self.page);
    }

    pub fn next(&mut self) -> bool {
        let before = self.page;
        self.set_page(self.page + 1);
        self.page != before
    }

    pub fn prev(&mut self) -> bool {
        let before = self.page;
        self.set_page(self.page.saturating_sub(1));
        self.page != before
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Row bounds of the current page within `0..total`.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(rows.len());
        let start = range.start.min(end);
        &rows[start..end]
    }
}
