//! Client-side pagination arithmetic over the normalized rows.

use std::ops::Range;

/// Rows shown per page.
pub const ITEMS_PER_PAGE: usize = 15;

/// Displayed in place of an empty cell.
pub const EMPTY_CELL: &str = "N/A";

/// `ceil(len / per_page)`; zero rows means zero pages.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Index range of the rows on the 1-based `page`, clipped to `len`.
pub fn page_range(len: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

pub fn display_cell(cell: &str) -> &str {
    if cell.is_empty() { EMPTY_CELL } else { cell }
}

pub fn page_indicator(current_page: usize, total_pages: usize) -> String {
    format!("Page {current_page} of {total_pages}")
}

/// Current page of the viewer. Only navigation (and clamping) changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.items_per_page)
    }

    /// Floors at page 1.
    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Caps at `total_pages`; a no-op when already there (or when there are no pages).
    pub fn next(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    pub fn can_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    /// Forces `1 <= current_page <= max(1, total_pages)`.
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    pub fn range(&self, len: usize) -> Range<usize> {
        page_range(len, self.current_page, self.items_per_page)
    }
}
